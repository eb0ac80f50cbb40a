//! Conversions into `image` crate buffers

use crate::framebuffer::{ColorBuffer, DepthBuffer};
use crate::geometry::HasDimensions;

/// Copies buffers into `image` crate images, for saving or further processing.
pub trait CopyToImage<P> where P: image::Pixel {
    fn copy_to_image(&self) -> Option<image::ImageBuffer<P, Vec<P::Subpixel>>>;
}

impl<'a> CopyToImage<image::Rgba<u8>> for ColorBuffer<'a> {
    fn copy_to_image(&self) -> Option<image::RgbaImage> {
        let dimensions = self.dimensions();

        let mut res = Vec::with_capacity(dimensions.area() * 4);

        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                res.extend_from_slice(&self.get_rgba8(x, y)?);
            }
        }

        image::RgbaImage::from_raw(dimensions.width, dimensions.height, res)
    }
}

impl<'a> CopyToImage<image::Luma<u8>> for DepthBuffer<'a> {
    /// Visualizes depth as grayscale, near is black and far is white
    fn copy_to_image(&self) -> Option<image::GrayImage> {
        let dimensions = self.dimensions();

        let mut res = Vec::with_capacity(dimensions.area());

        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                res.push(crate::framebuffer::color::denormalize(self.get_depth(x, y)?));
            }
        }

        image::GrayImage::from_raw(dimensions.width, dimensions.height, res)
    }
}
