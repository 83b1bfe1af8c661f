use crate::foundation::core::{FrameIndex, Vec3};
use crate::foundation::error::RepeaterResult;

/// Forward vectors shorter than this are treated as zero-length.
pub const FORWARD_EPSILON: f64 = 1e-9;

const DEFAULT_FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Camera state for one frame, as reported by the host scene graph.
///
/// `forward` is always unit length. A `focal_length` that is not a positive finite number means
/// "no perspective".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "CameraDef")]
pub struct CameraSample {
    pub position: Vec3,
    pub forward: Vec3,
    pub focal_length: f64,
}

#[derive(serde::Deserialize)]
struct CameraDef {
    position: Vec3,
    #[serde(default = "default_forward")]
    forward: Vec3,
    #[serde(default)]
    focal_length: f64,
}

fn default_forward() -> Vec3 {
    DEFAULT_FORWARD
}

impl From<CameraDef> for CameraSample {
    fn from(d: CameraDef) -> Self {
        Self::new(d.position, d.forward, d.focal_length)
    }
}

impl CameraSample {
    /// Build a sample, normalizing `forward` (zero-length falls back to `+z`).
    pub fn new(position: Vec3, forward: Vec3, focal_length: f64) -> Self {
        Self {
            position,
            forward: forward
                .normalized(FORWARD_EPSILON)
                .unwrap_or(DEFAULT_FORWARD),
            focal_length,
        }
    }

    /// Focal length when perspective scaling applies.
    pub fn perspective_focal_length(&self) -> Option<f64> {
        (self.focal_length.is_finite() && self.focal_length > 0.0).then_some(self.focal_length)
    }

    /// Signed distance of `p` along the view axis. Points behind the camera are negative.
    pub fn depth_of(&self, p: Vec3) -> f64 {
        (p - self.position).dot(self.forward)
    }
}

/// Host-side camera provider.
///
/// Returning `Ok(None)` means the composition has no active camera. Errors are not fatal to a
/// render; the caller logs them and falls back to camera-less math.
pub trait CameraSource {
    fn camera_at(&mut self, frame: FrameIndex) -> RepeaterResult<Option<CameraSample>>;
}

/// Provider for hosts without a 3D camera.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCamera;

impl CameraSource for NoCamera {
    fn camera_at(&mut self, _frame: FrameIndex) -> RepeaterResult<Option<CameraSample>> {
        Ok(None)
    }
}

/// A static camera.
impl CameraSource for CameraSample {
    fn camera_at(&mut self, _frame: FrameIndex) -> RepeaterResult<Option<CameraSample>> {
        Ok(Some(*self))
    }
}

impl<F> CameraSource for F
where
    F: FnMut(FrameIndex) -> RepeaterResult<Option<CameraSample>>,
{
    fn camera_at(&mut self, frame: FrameIndex) -> RepeaterResult<Option<CameraSample>> {
        self(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/camera.rs"]
mod tests;
