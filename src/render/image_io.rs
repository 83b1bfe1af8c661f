//! Conversions between straight-alpha `image` buffers and premultiplied [`PixelImage`]s.

use image::{DynamicImage, ImageBuffer, Rgba, Rgba32FImage, RgbaImage};

use crate::render::pixel::{Channel, Pixel};
use crate::render::surface::PixelImage;

/// Load any decoded image as premultiplied pixels of depth `C`.
pub fn premultiplied_from_dynamic<C: Channel>(img: &DynamicImage) -> PixelImage<C> {
    let rgba = img.to_rgba32f();
    PixelImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0.map(|v| f64::from(v).clamp(0.0, 1.0));
        Pixel::new(
            C::saturate(r * a * C::MAX_F64),
            C::saturate(g * a * C::MAX_F64),
            C::saturate(b * a * C::MAX_F64),
            C::saturate(a * C::MAX_F64),
        )
    })
}

/// Un-premultiply into a straight-alpha float image.
pub fn straight_rgba32f<C: Channel>(img: &PixelImage<C>) -> Rgba32FImage {
    ImageBuffer::from_fn(img.width, img.height, |x, y| {
        let [r, g, b, a] = img
            .get(x, y)
            .channels()
            .map(|c| (c.to_f64() / C::MAX_F64).clamp(0.0, 1.0));
        if a <= 0.0 {
            return Rgba([0.0; 4]);
        }
        let unmul = |c: f64| ((c / a).clamp(0.0, 1.0)) as f32;
        Rgba([unmul(r), unmul(g), unmul(b), a as f32])
    })
}

pub fn to_rgba8<C: Channel>(img: &PixelImage<C>) -> RgbaImage {
    DynamicImage::ImageRgba32F(straight_rgba32f(img)).to_rgba8()
}

pub fn to_rgba16<C: Channel>(img: &PixelImage<C>) -> ImageBuffer<Rgba<u16>, Vec<u16>> {
    DynamicImage::ImageRgba32F(straight_rgba32f(img)).to_rgba16()
}
