//! Packed 8-bit color buffers

use nalgebra::Vector4;

use crate::error::RenderResult;
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::math::saturate;

/// RGBA color with `f32` channels, nominally in `[0, 1]`.
pub type Color = Vector4<f32>;

/// Byte order of a packed 8-bit-per-channel pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// Bytes in memory are red, green, blue, alpha
    Rgba8,
    /// Bytes in memory are blue, green, red, alpha, as used by most window system bitmaps
    Bgra8,
}

impl Default for ColorFormat {
    #[inline]
    fn default() -> ColorFormat { ColorFormat::Rgba8 }
}

/// Converts a normalized channel to 8 bits, rounding to nearest
#[inline]
pub fn denormalize(channel: f32) -> u8 {
    // NaN saturates to 0 through the float to int cast
    (saturate(channel) * 255.0 + 0.5) as u8
}

#[inline]
pub fn normalize(channel: u8) -> f32 {
    channel as f32 / 255.0
}

impl ColorFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize { 4 }

    /// Packs a color into its in-memory byte order
    #[inline]
    pub fn pack(self, color: &Color) -> [u8; 4] {
        let (r, g, b, a) = (denormalize(color.x), denormalize(color.y), denormalize(color.z), denormalize(color.w));

        match self {
            ColorFormat::Rgba8 => [r, g, b, a],
            ColorFormat::Bgra8 => [b, g, r, a],
        }
    }

    /// Unpacks in-memory bytes into RGBA channels
    #[inline]
    pub fn unpack_rgba8(self, bytes: [u8; 4]) -> [u8; 4] {
        match self {
            ColorFormat::Rgba8 => bytes,
            ColorFormat::Bgra8 => [bytes[2], bytes[1], bytes[0], bytes[3]],
        }
    }
}

/// Borrowed color buffer with a row stride in bytes.
pub struct ColorBuffer<'a> {
    data: &'a mut [u8],
    dimensions: Dimensions,
    stride: usize,
    format: ColorFormat,
}

impl<'a> ColorBuffer<'a> {
    /// Wraps `data` as a `width` by `height` color buffer with rows `stride` bytes apart.
    ///
    /// A stride of zero means tightly packed rows.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, stride: usize, format: ColorFormat) -> RenderResult<ColorBuffer<'a>> {
        let stride = super::check_layout(data.len(), width, height, stride, format.bytes_per_pixel())?;

        Ok(ColorBuffer { data, dimensions: Dimensions::new(width, height), stride, format })
    }

    #[inline]
    pub fn format(&self) -> ColorFormat { self.format }

    #[inline]
    pub fn stride(&self) -> usize { self.stride }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if self.dimensions.in_bounds(Coordinate::new(x, y)) {
            Some(y as usize * self.stride + x as usize * self.format.bytes_per_pixel())
        } else {
            None
        }
    }

    /// Raw RGBA bytes of a pixel, or `None` outside the buffer
    pub fn get_rgba8(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.offset(x, y).map(|o| {
            self.format.unpack_rgba8([self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]])
        })
    }

    /// Normalized color of a pixel, or `None` outside the buffer
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.get_rgba8(x, y).map(|[r, g, b, a]| {
            Color::new(normalize(r), normalize(g), normalize(b), normalize(a))
        })
    }

    /// Writes a pixel. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: &Color) {
        if let Some(o) = self.offset(x, y) {
            self.data[o..o + 4].copy_from_slice(&self.format.pack(color));
        }
    }

    /// Fills every pixel with a color, leaving row padding untouched
    pub fn clear(&mut self, color: &Color) {
        let packed = self.format.pack(color);
        let row = self.dimensions.width as usize * self.format.bytes_per_pixel();

        for y in 0..self.dimensions.height as usize {
            let start = y * self.stride;

            for pixel in self.data[start..start + row].chunks_mut(4) {
                pixel.copy_from_slice(&packed);
            }
        }
    }

    /// The underlying bytes, including any row padding
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { self.data }
}

impl<'a> HasDimensions for ColorBuffer<'a> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
