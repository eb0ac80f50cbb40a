//! Render targets
//!
//! The pipeline never owns its target memory. Color and depth buffers borrow caller-provided bytes
//! described by width, height and row stride, and every access is bounds-checked.

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Dimensions, HasDimensions};

pub mod color;
pub mod depth;

pub use self::color::{Color, ColorBuffer, ColorFormat};
pub use self::depth::{DepthBuffer, DepthFormat};

/// Validates that `len` bytes can hold `height` rows of `width` pixels `stride` bytes apart.
///
/// A stride of zero means tightly packed rows. Returns the effective stride.
pub(crate) fn check_layout(len: usize, width: u32, height: u32, stride: usize, bytes_per_pixel: usize) -> RenderResult<usize> {
    let row = width as usize * bytes_per_pixel;
    let stride = if stride == 0 { row } else { stride };

    let required = if width == 0 || height == 0 { 0 } else { stride * (height as usize - 1) + row };

    if stride < row || len < required {
        return Err(RenderError::InvalidBufferLayout { width, height, stride, len });
    }

    Ok(stride)
}

/// A color buffer with an optional depth buffer of the same size.
pub struct RenderTarget<'a> {
    pub color: ColorBuffer<'a>,
    pub depth: Option<DepthBuffer<'a>>,
}

impl<'a> RenderTarget<'a> {
    /// Render target without a depth buffer, so depth testing is skipped
    pub fn new(color: ColorBuffer<'a>) -> RenderTarget<'a> {
        RenderTarget { color, depth: None }
    }

    /// Render target with a depth buffer, which must match the color buffer's dimensions
    pub fn with_depth(color: ColorBuffer<'a>, depth: DepthBuffer<'a>) -> RenderResult<RenderTarget<'a>> {
        if color.dimensions() != depth.dimensions() {
            return Err(RenderError::DimensionMismatch);
        }

        Ok(RenderTarget { color, depth: Some(depth) })
    }

    /// Releases the borrowed buffers
    pub fn into_inner(self) -> (ColorBuffer<'a>, Option<DepthBuffer<'a>>) {
        (self.color, self.depth)
    }
}

impl<'a> HasDimensions for RenderTarget<'a> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.color.dimensions() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layout_accepts_padded_rows() {
        // 3 pixels per row, padded to 16 bytes, last row unpadded
        assert_eq!(check_layout(16 + 12, 3, 2, 16, 4), Ok(16));
        assert_eq!(check_layout(24, 3, 2, 0, 4), Ok(12));
    }

    #[test]
    fn test_layout_rejects_short_buffers() {
        assert!(check_layout(27, 3, 2, 16, 4).is_err());
        // stride smaller than a row
        assert!(check_layout(1024, 3, 2, 8, 4).is_err());
    }

    #[test]
    fn test_render_target_dimension_mismatch() {
        let mut color = vec![0u8; 4 * 4 * 4];
        let mut depth = vec![0u8; 4 * 2 * 4];

        let color = ColorBuffer::new(&mut color, 4, 4, 0, ColorFormat::Rgba8).unwrap();
        let depth = DepthBuffer::new(&mut depth, 4, 2, 0, DepthFormat::D24).unwrap();

        assert_eq!(RenderTarget::with_depth(color, depth).err(), Some(RenderError::DimensionMismatch));
    }
}
