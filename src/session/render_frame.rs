use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RepeaterError, RepeaterResult};
use crate::params::snapshot::ParamSnapshot;
use crate::render::pixel::{Channel, Pixel};
use crate::render::rasterize::{AbortPoll, RasterStats, render_copies};
use crate::render::surface::{OutputFrame, SourceFrame, Surface, SurfaceMut};
use crate::scene::camera::{CameraSample, CameraSource};
use crate::scene::state::RepeaterState;
use crate::transform::compute::{CopyTransform, compute_copy_transforms};
use crate::transform::depth::sort_copies_by_depth;

/// How a successful render ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    Completed,
    /// The host asked to stop; the output holds the copies drawn before that.
    Cancelled,
}

/// Summary of one [`render_frame`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    pub status: RenderStatus,
    pub copies_total: u32,
    /// Visible copies composited before the render finished or was cancelled.
    pub copies_drawn: u32,
    /// `true` when camera-aware math was applied.
    pub camera_used: bool,
}

/// Everything one frame needs from the host besides the pixel buffers.
pub struct FrameInputs<'a> {
    pub params: &'a ParamSnapshot,
    pub frame: FrameIndex,
    pub camera: &'a mut dyn CameraSource,
    pub abort: &'a mut dyn AbortPoll,
}

/// Render one frame of the repeater into `dst`.
///
/// Pipeline: extract parameters, validate copy counts, query the camera (camera-aware only),
/// compute and depth-sort copy transforms, clear `dst`, then composite every visible copy.
/// All [`RepeaterError::BadParameter`] checks run before the camera is queried or anything is
/// allocated, so a rejected frame leaves `dst` untouched.
#[tracing::instrument(skip_all, fields(frame = inputs.frame.0))]
pub fn render_frame(
    inputs: FrameInputs<'_>,
    src: SourceFrame<'_>,
    dst: OutputFrame<'_>,
) -> RepeaterResult<RenderOutcome> {
    let FrameInputs {
        params,
        frame,
        camera,
        abort,
    } = inputs;

    let state = RepeaterState::from_params(params)?;
    let copies_total = state.total_copies()?;
    if src.depth() != dst.depth() {
        return Err(depth_mismatch(&src, &dst));
    }

    let camera = if state.camera_aware {
        query_camera(camera, frame)
    } else {
        None
    };

    let mut copies = compute_copy_transforms(&state, camera.as_ref())?;
    sort_copies_by_depth(&mut copies);

    let stats = match (src, dst) {
        (SourceFrame::U8(s), OutputFrame::U8(mut d)) => clear_and_draw(&copies, &s, &mut d, abort),
        (SourceFrame::U16(s), OutputFrame::U16(mut d)) => {
            clear_and_draw(&copies, &s, &mut d, abort)
        }
        (SourceFrame::F32(s), OutputFrame::F32(mut d)) => {
            clear_and_draw(&copies, &s, &mut d, abort)
        }
        (src, dst) => return Err(depth_mismatch(&src, &dst)),
    };

    let status = if stats.cancelled {
        tracing::debug!(drawn = stats.copies_drawn, "render cancelled by host");
        RenderStatus::Cancelled
    } else {
        RenderStatus::Completed
    };
    tracing::debug!(copies_total, drawn = stats.copies_drawn, "frame rendered");

    Ok(RenderOutcome {
        status,
        copies_total,
        copies_drawn: stats.copies_drawn,
        camera_used: camera.is_some(),
    })
}

fn depth_mismatch(src: &SourceFrame<'_>, dst: &OutputFrame<'_>) -> RepeaterError {
    RepeaterError::bad_parameter(format!(
        "source depth {:?} does not match output depth {:?}",
        src.depth(),
        dst.depth()
    ))
}

fn query_camera(camera: &mut dyn CameraSource, frame: FrameIndex) -> Option<CameraSample> {
    match camera.camera_at(frame) {
        Ok(sample) => sample,
        Err(e) => {
            tracing::warn!(error = %e, "camera query failed; rendering without camera");
            None
        }
    }
}

fn clear_and_draw<C: Channel>(
    copies: &[CopyTransform],
    src: &Surface<'_, C>,
    dst: &mut SurfaceMut<'_, C>,
    abort: &mut dyn AbortPoll,
) -> RasterStats {
    dst.fill(Pixel::TRANSPARENT);
    render_copies(copies, src, dst, abort)
}
