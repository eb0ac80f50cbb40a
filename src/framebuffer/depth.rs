//! Depth buffers

use crate::error::RenderResult;
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::math::saturate;

const D24_MAX: u32 = (1 << 24) - 1;

/// Storage representation of depth values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFormat {
    /// 24-bit normalized fixed point, stored in the low bits of a little-endian `u32`
    D24,
    /// 32-bit float, stored little-endian
    D32Float,
}

impl Default for DepthFormat {
    #[inline]
    fn default() -> DepthFormat { DepthFormat::D24 }
}

impl DepthFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize { 4 }

    /// Converts a depth value into its stored bits.
    ///
    /// Fixed point formats clamp to `[0, 1]` first.
    #[inline]
    pub fn encode(self, depth: f32) -> u32 {
        match self {
            DepthFormat::D24 => (saturate(depth) * D24_MAX as f32).round() as u32,
            DepthFormat::D32Float => depth.to_bits(),
        }
    }

    /// Converts stored bits back into a depth value
    #[inline]
    pub fn decode(self, bits: u32) -> f32 {
        match self {
            DepthFormat::D24 => (bits & D24_MAX) as f32 / D24_MAX as f32,
            DepthFormat::D32Float => f32::from_bits(bits),
        }
    }

    /// Rounds a depth value to what the format can represent
    #[inline]
    pub fn quantize(self, depth: f32) -> f32 {
        self.decode(self.encode(depth))
    }
}

/// Borrowed depth buffer with a row stride in bytes.
pub struct DepthBuffer<'a> {
    data: &'a mut [u8],
    dimensions: Dimensions,
    stride: usize,
    format: DepthFormat,
}

impl<'a> DepthBuffer<'a> {
    /// Wraps `data` as a `width` by `height` depth buffer with rows `stride` bytes apart.
    ///
    /// A stride of zero means tightly packed rows.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, stride: usize, format: DepthFormat) -> RenderResult<DepthBuffer<'a>> {
        let stride = super::check_layout(data.len(), width, height, stride, format.bytes_per_pixel())?;

        Ok(DepthBuffer { data, dimensions: Dimensions::new(width, height), stride, format })
    }

    #[inline]
    pub fn format(&self) -> DepthFormat { self.format }

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

    /// Stored bits of a pixel, or `None` outside the buffer
    #[inline]
    pub fn get_bits(&self, x: u32, y: u32) -> Option<u32> {
        self.offset(x, y).map(|o| {
            u32::from_le_bytes([self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]])
        })
    }

    /// Writes stored bits. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_bits(&mut self, x: u32, y: u32, bits: u32) {
        if let Some(o) = self.offset(x, y) {
            self.data[o..o + 4].copy_from_slice(&bits.to_le_bytes());
        }
    }

    /// Depth value of a pixel, or `None` outside the buffer
    #[inline]
    pub fn get_depth(&self, x: u32, y: u32) -> Option<f32> {
        self.get_bits(x, y).map(|bits| self.format.decode(bits))
    }

    /// Writes a depth value. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_depth(&mut self, x: u32, y: u32, depth: f32) {
        let bits = self.format.encode(depth);
        self.set_bits(x, y, bits);
    }

    /// Fills every pixel with a depth value, usually the far value `1.0`
    pub fn clear(&mut self, depth: f32) {
        let bytes = self.format.encode(depth).to_le_bytes();
        let row = self.dimensions.width as usize * self.format.bytes_per_pixel();

        for y in 0..self.dimensions.height as usize {
            let start = y * self.stride;

            for pixel in self.data[start..start + row].chunks_mut(4) {
                pixel.copy_from_slice(&bytes);
            }
        }
    }
}

impl<'a> HasDimensions for DepthBuffer<'a> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
