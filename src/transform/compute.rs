use crate::foundation::core::{Vec2, Vec3};
use crate::foundation::error::{RepeaterError, RepeaterResult};
use crate::foundation::math::{clamp_or, finite_or, lerp};
use crate::scene::camera::CameraSample;
use crate::scene::state::RepeaterState;

pub const MIN_SCALE: f64 = 0.001;
pub const MAX_SCALE: f64 = 10_000.0;
const BASE_SCALE_MAX: f64 = 1000.0;
const STEP_RATIO_MIN: f64 = 0.001;
const STEP_RATIO_MAX: f64 = 10.0;

pub const MIN_PERSPECTIVE: f64 = 0.001;
pub const MAX_PERSPECTIVE: f64 = 100.0;
const NEAR_PLANE_PERSPECTIVE: f64 = 10.0;

/// Render-time 2D cache of a copy's placement.
///
/// `cos_z`/`sin_z` are of the *negated* net z rotation: the rasterizer walks output pixels and
/// maps them back into the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldMatrix {
    pub cos_z: f64,
    pub sin_z: f64,
    /// Net 2D translation of the copy (camera-relative in camera-aware mode).
    pub translation: Vec2,
}

impl WorldMatrix {
    pub const IDENTITY: Self = Self {
        cos_z: 1.0,
        sin_z: 0.0,
        translation: Vec2::ZERO,
    };

    fn new(rotation_z_deg: f64, translation: Vec2) -> Self {
        let (sin_z, cos_z) = (-rotation_z_deg).to_radians().sin_cos();
        Self {
            cos_z,
            sin_z,
            translation,
        }
    }
}

/// One resolved copy of the source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CopyTransform {
    /// Flat grid index `z * (nx * ny) + y * nx + x`.
    pub index: u32,
    pub position: Vec3,
    /// Degrees.
    pub rotation: Vec3,
    /// Percent, perspective included.
    pub scale: f64,
    /// Percent, `[0, 100]`.
    pub opacity: f64,
    pub world: WorldMatrix,
    /// Perspective factor folded into `scale`; 1.0 without a camera.
    pub view_scale: f64,
    /// Signed distance along the camera's forward axis, or raw z without a camera.
    pub camera_depth: f64,
    pub visible: bool,
}

/// Compute every copy's transform in grid order (z outermost, x innermost).
///
/// `camera` is used only when `state.camera_aware` is set. Fails with
/// [`RepeaterError::BadParameter`] on invalid copy counts or a non-finite state; numeric
/// degeneracies inside the per-copy math are clamped instead.
#[tracing::instrument(skip_all, fields(copies = ?state.copies, camera = camera.is_some()))]
pub fn compute_copy_transforms(
    state: &RepeaterState,
    camera: Option<&CameraSample>,
) -> RepeaterResult<Vec<CopyTransform>> {
    let total = state.total_copies()?;
    if !state.is_finite() {
        return Err(RepeaterError::bad_parameter(
            "repeater state has non-finite fields",
        ));
    }
    let camera = camera.filter(|_| state.camera_aware);

    let [nx, ny, nz] = state.copies;
    let base_scale = clamp_or(state.base_scale, MIN_SCALE, BASE_SCALE_MAX, 100.0);
    let step_ratio = clamp_or(state.step_scale / 100.0, STEP_RATIO_MIN, STEP_RATIO_MAX, 1.0);

    let mut out = Vec::with_capacity(total as usize);
    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                let index = iz * (nx * ny) + iy * nx + ix;
                let grid = Vec3::new(f64::from(ix), f64::from(iy), f64::from(iz));
                out.push(copy_transform(
                    state, camera, index, total, grid, base_scale, step_ratio,
                ));
            }
        }
    }

    tracing::debug!(
        total,
        visible = out.iter().filter(|t| t.visible).count(),
        "computed copy transforms"
    );
    Ok(out)
}

fn copy_transform(
    state: &RepeaterState,
    camera: Option<&CameraSample>,
    index: u32,
    total: u32,
    grid: Vec3,
    base_scale: f64,
    step_ratio: f64,
) -> CopyTransform {
    let k = f64::from(index);

    let position = Vec3::new(
        state.base_position.x + state.step_position.x * grid.x,
        state.base_position.y + state.step_position.y * grid.y,
        state.base_position.z + state.step_position.z * grid.z,
    );
    let rotation = state.base_rotation + state.step_rotation * k;

    // index <= MAX_COPIES, so the exponent always fits.
    let compounded = base_scale * step_ratio.powi(index as i32);
    let mut scale = clamp_or(compounded, MIN_SCALE, MAX_SCALE, MIN_SCALE);

    let opacity = copy_opacity(state, index, total);

    let (camera_depth, view_scale) = match camera {
        Some(cam) => {
            let depth = finite_or(cam.depth_of(position), 0.0);
            let view = cam
                .perspective_focal_length()
                .map_or(1.0, |f| perspective_scale(f, depth));
            (depth, view)
        }
        None => (finite_or(position.z, 0.0), 1.0),
    };
    scale = clamp_or(scale * view_scale, MIN_SCALE, MAX_SCALE, MIN_SCALE);

    let translation = match camera {
        Some(cam) => position.xy() - cam.position.xy(),
        None => position.xy(),
    };

    CopyTransform {
        index,
        position,
        rotation,
        scale,
        opacity,
        world: WorldMatrix::new(finite_or(rotation.z, 0.0), translation),
        view_scale,
        camera_depth,
        visible: opacity > 0.0 && scale > MIN_SCALE,
    }
}

/// Start→end interpolation across the flat copy range, weighted by the base opacity.
fn copy_opacity(state: &RepeaterState, index: u32, total: u32) -> f64 {
    let t = if total > 1 {
        f64::from(index) / f64::from(total - 1)
    } else {
        0.0
    };
    let ramp = lerp(state.opacity_start, state.opacity_end, t);
    let v = finite_or(ramp * state.base_opacity / 100.0, 100.0);
    v.clamp(0.0, 100.0)
}

/// Heuristic size falloff `focal / (focal - depth)` with guards around the singularity.
pub fn perspective_scale(focal_length: f64, depth: f64) -> f64 {
    let denominator = focal_length - depth;
    let s = if denominator > 1.0 {
        focal_length / denominator
    } else if denominator < -1.0 {
        // At or behind the camera plane: collapse instead of flipping sign.
        MIN_PERSPECTIVE
    } else if denominator > 0.0 {
        NEAR_PLANE_PERSPECTIVE
    } else {
        MIN_PERSPECTIVE
    };
    clamp_or(s, MIN_PERSPECTIVE, MAX_PERSPECTIVE, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/compute.rs"]
mod tests;
