//! Single 2D texture sampling for fragment shaders

use nalgebra::Vector2;

use crate::error::RenderResult;
use crate::framebuffer::{Color, ColorFormat};
use crate::framebuffer::color::normalize;
use crate::geometry::{Dimensions, HasDimensions};
use crate::interpolate::Interpolate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Nearest,
    Bilinear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Equivalent to `GL_CLAMP_TO_EDGE`
    Clamp,
    /// Equivalent to `GL_REPEAT`
    Wrap,
    /// Equivalent to `GL_CLAMP_TO_BORDER`
    Border(Color),
}

/// Sampling configuration, usually kept in the uniform block next to the texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    pub filter: Filter,
    pub edge: Edge,
}

impl Default for Sampler {
    fn default() -> Sampler {
        Sampler { filter: Filter::Nearest, edge: Edge::Wrap }
    }
}

/// Borrowed 8-bit RGBA texture, addressed with normalized coordinates
/// where `(0, 0)` is the first byte of the first row.
#[derive(Clone, Copy)]
pub struct Texture2D<'a> {
    data: &'a [u8],
    dimensions: Dimensions,
    stride: usize,
    format: ColorFormat,
}

impl<'a> Texture2D<'a> {
    /// Wraps `data` as a `width` by `height` texture with rows `stride` bytes apart.
    ///
    /// A stride of zero means tightly packed rows.
    pub fn new(data: &'a [u8], width: u32, height: u32, stride: usize, format: ColorFormat) -> RenderResult<Texture2D<'a>> {
        let stride = crate::framebuffer::check_layout(data.len(), width, height, stride, format.bytes_per_pixel())?;

        Ok(Texture2D { data, dimensions: Dimensions::new(width, height), stride, format })
    }

    /// Resolves a possibly out-of-range texel coordinate according to the edge mode.
    ///
    /// Returns `Err(border)` when the border color should be used instead.
    #[inline]
    fn resolve(&self, x: i64, y: i64, edge: Edge) -> Result<(usize, usize), Color> {
        let (w, h) = (self.dimensions.width as i64, self.dimensions.height as i64);

        if w == 0 || h == 0 {
            return Err(match edge {
                Edge::Border(color) => color,
                _ => Color::zeros(),
            });
        }

        match edge {
            Edge::Clamp => Ok((x.max(0).min(w - 1) as usize, y.max(0).min(h - 1) as usize)),
            Edge::Wrap => Ok((x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)),
            Edge::Border(color) => {
                if x < 0 || y < 0 || x >= w || y >= h {
                    Err(color)
                } else {
                    Ok((x as usize, y as usize))
                }
            }
        }
    }

    /// Fetches a single texel, applying the edge mode to out-of-range coordinates
    pub fn texel(&self, x: i64, y: i64, edge: Edge) -> Color {
        match self.resolve(x, y, edge) {
            Ok((x, y)) => {
                let o = y * self.stride + x * self.format.bytes_per_pixel();

                let [r, g, b, a] = self.format.unpack_rgba8([self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]);

                Color::new(normalize(r), normalize(g), normalize(b), normalize(a))
            }
            Err(border) => border,
        }
    }

    /// Samples the texture at normalized coordinates
    pub fn sample(&self, uv: &Vector2<f32>, sampler: &Sampler) -> Color {
        let u = uv.x * self.dimensions.width as f32;
        let v = uv.y * self.dimensions.height as f32;

        match sampler.filter {
            Filter::Nearest => self.texel(u.floor() as i64, v.floor() as i64, sampler.edge),
            Filter::Bilinear => {
                // Texel centers sit at half-integer coordinates
                let (u, v) = (u - 0.5, v - 0.5);
                let (x0, y0) = (u.floor(), v.floor());
                let (fx, fy) = (u - x0, v - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);

                let c00 = self.texel(x0, y0, sampler.edge);
                let c10 = self.texel(x0 + 1, y0, sampler.edge);
                let c01 = self.texel(x0, y0 + 1, sampler.edge);
                let c11 = self.texel(x0 + 1, y0 + 1, sampler.edge);

                let bottom = Interpolate::linear_interpolate(fx, &c00, &c10);
                let top = Interpolate::linear_interpolate(fx, &c01, &c11);

                Interpolate::linear_interpolate(fy, &bottom, &top)
            }
        }
    }
}

impl<'a> HasDimensions for Texture2D<'a> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
