use std::fmt::Debug;

/// Storage type of one colour channel.
///
/// The three supported depths share every sampling and compositing routine; they differ only in
/// the channel maximum and in how blended values are rounded back into storage.
pub trait Channel: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    const ZERO: Self;
    /// Fully opaque / full intensity.
    const MAX: Self;
    const MAX_F64: f64;

    fn to_f64(self) -> f64;

    /// Store a convex blend of in-range values. Integer channels round to nearest; float channels
    /// are stored as-is.
    fn from_blend(v: f64) -> Self;

    /// Store an arbitrary value clamped to `[0, MAX]`. NaN stores as zero.
    fn saturate(v: f64) -> Self;
}

impl Channel for u8 {
    const ZERO: Self = 0;
    const MAX: Self = 255;
    const MAX_F64: f64 = 255.0;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_blend(v: f64) -> Self {
        (v + 0.5) as u8
    }

    fn saturate(v: f64) -> Self {
        if v.is_nan() {
            return 0;
        }
        (v.clamp(0.0, Self::MAX_F64) + 0.5) as u8
    }
}

/// Deep-colour channels follow the host convention of `0..=32768`.
impl Channel for u16 {
    const ZERO: Self = 0;
    const MAX: Self = 32768;
    const MAX_F64: f64 = 32768.0;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_blend(v: f64) -> Self {
        (v + 0.5) as u16
    }

    fn saturate(v: f64) -> Self {
        if v.is_nan() {
            return 0;
        }
        (v.clamp(0.0, Self::MAX_F64) + 0.5) as u16
    }
}

impl Channel for f32 {
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;
    const MAX_F64: f64 = 1.0;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_blend(v: f64) -> Self {
        v as f32
    }

    fn saturate(v: f64) -> Self {
        if v.is_nan() {
            return 0.0;
        }
        v.clamp(0.0, Self::MAX_F64) as f32
    }
}

/// Premultiplied RGBA pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel<C> {
    pub r: C,
    pub g: C,
    pub b: C,
    pub a: C,
}

impl<C: Channel> Pixel<C> {
    pub const TRANSPARENT: Self = Self {
        r: C::ZERO,
        g: C::ZERO,
        b: C::ZERO,
        a: C::ZERO,
    };

    pub const fn new(r: C, g: C, b: C, a: C) -> Self {
        Self { r, g, b, a }
    }

    pub fn channels(self) -> [C; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_channels([r, g, b, a]: [C; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Scale all four channels by `factor` (expected in `[0, 1]`).
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_channels(self.channels().map(|c| C::from_blend(c.to_f64() * factor)))
    }
}

/// Bit depth of a host buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelDepth {
    #[default]
    U8,
    U16,
    F32,
}

#[cfg(test)]
#[path = "../../tests/unit/render/pixel.rs"]
mod tests;
