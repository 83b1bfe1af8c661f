use crate::foundation::core::{Point, Vec2};
use crate::render::pixel::{Channel, Pixel};
use crate::render::surface::Surface;
use crate::transform::compute::CopyTransform;

/// Destination-to-source mapping for one copy.
///
/// Rendering walks output pixels and pulls from the source, so this is the inverse of the copy's
/// placement: undo the translation, rotate by the stored (already negated) angle about the image
/// centre, then divide out the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseMap {
    center: Point,
    cos_z: f64,
    sin_z: f64,
    offset: Vec2,
    inv_scale: f64,
}

impl InverseMap {
    pub fn for_copy(copy: &CopyTransform, src_width: u32, src_height: u32) -> Self {
        Self {
            center: Point::new(f64::from(src_width) / 2.0, f64::from(src_height) / 2.0),
            cos_z: copy.world.cos_z,
            sin_z: copy.world.sin_z,
            offset: -copy.world.translation,
            inv_scale: 100.0 / copy.scale,
        }
    }

    pub fn map(&self, dst: Point) -> Point {
        let d = dst - self.center;
        let rotated = Vec2::new(
            d.x * self.cos_z - d.y * self.sin_z,
            d.x * self.sin_z + d.y * self.cos_z,
        );
        self.center + (rotated + self.offset) * self.inv_scale
    }
}

/// Bilinear sample at `p`.
///
/// Anything outside `[0, width - 1) x [0, height - 1)` (and NaN) yields a transparent pixel, so
/// all four neighbours are always in bounds.
pub fn sample_bilinear<C: Channel>(src: &Surface<'_, C>, p: Point) -> Pixel<C> {
    let max_x = f64::from(src.width()) - 1.0;
    let max_y = f64::from(src.height()) - 1.0;
    if !(p.x >= 0.0 && p.y >= 0.0 && p.x < max_x && p.y < max_y) {
        return Pixel::TRANSPARENT;
    }

    let x0 = p.x as usize;
    let y0 = p.y as usize;
    let fx = p.x - x0 as f64;
    let fy = p.y - y0 as f64;

    let p00 = src.pixel(x0, y0).channels();
    let p10 = src.pixel(x0 + 1, y0).channels();
    let p01 = src.pixel(x0, y0 + 1).channels();
    let p11 = src.pixel(x0 + 1, y0 + 1).channels();

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut out = [C::ZERO; 4];
    for (i, o) in out.iter_mut().enumerate() {
        *o = C::from_blend(
            p00[i].to_f64() * w00
                + p10[i].to_f64() * w10
                + p01[i].to_f64() * w01
                + p11[i].to_f64() * w11,
        );
    }
    Pixel::from_channels(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sample.rs"]
mod tests;
