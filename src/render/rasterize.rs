use crate::foundation::core::Point;
use crate::render::composite::over;
use crate::render::pixel::Channel;
use crate::render::sample::{InverseMap, sample_bilinear};
use crate::render::surface::{Surface, SurfaceMut};
use crate::transform::compute::CopyTransform;

/// Progress report handed to the host's abort check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Copies finished so far, in draw order.
    pub copies_done: u32,
    pub copies_total: u32,
}

/// Cooperative cancellation hook, polled after every copy.
///
/// Returning `true` stops the walk; everything composited so far stays in the output.
pub trait AbortPoll {
    fn should_abort(&mut self, progress: Progress) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NeverAbort;

impl AbortPoll for NeverAbort {
    fn should_abort(&mut self, _progress: Progress) -> bool {
        false
    }
}

impl<F> AbortPoll for F
where
    F: FnMut(Progress) -> bool,
{
    fn should_abort(&mut self, progress: Progress) -> bool {
        self(progress)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Visible copies composited.
    pub copies_drawn: u32,
    pub cancelled: bool,
}

/// Composite `copies` (already in draw order) from `src` into `dst`.
///
/// Every visible copy walks the full output; pixels that map outside the source are rejected by
/// the sampler's bounds check.
pub fn render_copies<C: Channel>(
    copies: &[CopyTransform],
    src: &Surface<'_, C>,
    dst: &mut SurfaceMut<'_, C>,
    abort: &mut dyn AbortPoll,
) -> RasterStats {
    let copies_total = copies.len() as u32;
    let mut stats = RasterStats::default();

    for (i, copy) in copies.iter().enumerate() {
        if copy.visible {
            draw_copy(copy, src, dst);
            stats.copies_drawn += 1;
        }

        let progress = Progress {
            copies_done: i as u32 + 1,
            copies_total,
        };
        if abort.should_abort(progress) {
            stats.cancelled = true;
            break;
        }
    }
    stats
}

/// Composite one copy over the whole destination.
pub fn draw_copy<C: Channel>(copy: &CopyTransform, src: &Surface<'_, C>, dst: &mut SurfaceMut<'_, C>) {
    let map = InverseMap::for_copy(copy, src.width(), src.height());
    let opacity = (copy.opacity / 100.0).clamp(0.0, 1.0);

    for y in 0..dst.height() {
        let fy = f64::from(y);
        for (x, d) in dst.row_mut(y).iter_mut().enumerate() {
            let mut px = sample_bilinear(src, map.map(Point::new(x as f64, fy)));
            if px.a == C::ZERO {
                continue;
            }
            if opacity < 1.0 {
                px = px.scaled(opacity);
            }
            over(d, px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterize.rs"]
mod tests;
