use crate::foundation::error::{RepeaterError, RepeaterResult};
use crate::render::pixel::{Channel, Pixel, PixelDepth};

fn required_len(width: u32, height: u32, stride: usize) -> RepeaterResult<usize> {
    if (width as usize) > stride {
        return Err(RepeaterError::bad_parameter(format!(
            "row stride {stride} is smaller than width {width}"
        )));
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    stride
        .checked_mul(height as usize - 1)
        .and_then(|v| v.checked_add(width as usize))
        .ok_or_else(|| RepeaterError::bad_parameter("buffer size overflow"))
}

fn check_len(len: usize, width: u32, height: u32, stride: usize) -> RepeaterResult<()> {
    let need = required_len(width, height, stride)?;
    if len < need {
        return Err(RepeaterError::bad_parameter(format!(
            "{width}x{height} buffer with stride {stride} needs {need} pixels, got {len}"
        )));
    }
    Ok(())
}

/// Read-only view of a host pixel buffer. `stride` is in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Surface<'a, C> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a [Pixel<C>],
}

impl<'a, C: Channel> Surface<'a, C> {
    pub fn new(width: u32, height: u32, stride: usize, data: &'a [Pixel<C>]) -> RepeaterResult<Self> {
        check_len(data.len(), width, height, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`. Callers keep coordinates inside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel<C> {
        self.data[y * self.stride + x]
    }

    pub fn row(&self, y: u32) -> &'a [Pixel<C>] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }
}

/// Writable view of a host pixel buffer. Writes stay within `[0, width) x [0, height)`.
#[derive(Debug)]
pub struct SurfaceMut<'a, C> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a mut [Pixel<C>],
}

impl<'a, C: Channel> SurfaceMut<'a, C> {
    pub fn new(
        width: u32,
        height: u32,
        stride: usize,
        data: &'a mut [Pixel<C>],
    ) -> RepeaterResult<Self> {
        check_len(data.len(), width, height, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel<C>] {
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize]
    }

    /// Fill the visible area, leaving stride padding alone.
    pub fn fill(&mut self, px: Pixel<C>) {
        for y in 0..self.height {
            self.row_mut(y).fill(px);
        }
    }
}

/// Owned, tightly packed image.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelImage<C> {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel<C>>,
}

impl<C: Channel> PixelImage<C> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, px: Pixel<C>) -> Self {
        Self {
            width,
            height,
            pixels: vec![px; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel<C>) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Pixel<C> {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn put(&mut self, x: u32, y: u32, px: Pixel<C>) {
        let w = self.width as usize;
        self.pixels[y as usize * w + x as usize] = px;
    }

    pub fn view(&self) -> Surface<'_, C> {
        Surface {
            width: self.width,
            height: self.height,
            stride: self.width as usize,
            data: &self.pixels,
        }
    }

    pub fn view_mut(&mut self) -> SurfaceMut<'_, C> {
        SurfaceMut {
            width: self.width,
            height: self.height,
            stride: self.width as usize,
            data: &mut self.pixels,
        }
    }
}

/// Source buffer tagged with its pixel depth.
#[derive(Clone, Copy, Debug)]
pub enum SourceFrame<'a> {
    U8(Surface<'a, u8>),
    U16(Surface<'a, u16>),
    F32(Surface<'a, f32>),
}

/// Destination buffer tagged with its pixel depth.
#[derive(Debug)]
pub enum OutputFrame<'a> {
    U8(SurfaceMut<'a, u8>),
    U16(SurfaceMut<'a, u16>),
    F32(SurfaceMut<'a, f32>),
}

impl SourceFrame<'_> {
    pub fn depth(&self) -> PixelDepth {
        match self {
            Self::U8(_) => PixelDepth::U8,
            Self::U16(_) => PixelDepth::U16,
            Self::F32(_) => PixelDepth::F32,
        }
    }
}

impl OutputFrame<'_> {
    pub fn depth(&self) -> PixelDepth {
        match self {
            Self::U8(_) => PixelDepth::U8,
            Self::U16(_) => PixelDepth::U16,
            Self::F32(_) => PixelDepth::F32,
        }
    }
}

impl<'a> From<Surface<'a, u8>> for SourceFrame<'a> {
    fn from(s: Surface<'a, u8>) -> Self {
        Self::U8(s)
    }
}

impl<'a> From<Surface<'a, u16>> for SourceFrame<'a> {
    fn from(s: Surface<'a, u16>) -> Self {
        Self::U16(s)
    }
}

impl<'a> From<Surface<'a, f32>> for SourceFrame<'a> {
    fn from(s: Surface<'a, f32>) -> Self {
        Self::F32(s)
    }
}

impl<'a> From<SurfaceMut<'a, u8>> for OutputFrame<'a> {
    fn from(s: SurfaceMut<'a, u8>) -> Self {
        Self::U8(s)
    }
}

impl<'a> From<SurfaceMut<'a, u16>> for OutputFrame<'a> {
    fn from(s: SurfaceMut<'a, u16>) -> Self {
        Self::U16(s)
    }
}

impl<'a> From<SurfaceMut<'a, f32>> for OutputFrame<'a> {
    fn from(s: SurfaceMut<'a, f32>) -> Self {
        Self::F32(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
