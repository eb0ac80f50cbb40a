use nalgebra::{Vector2, Vector4};

use crate::interpolate::Interpolate;

use super::{ClipVertex, Varyings, Viewport, DepthRange};

/// Defines a vertex and its varyings in window-space, ready for rasterization.
///
/// Clip-space vertices are transformed to window-space after clipping
/// but before scan conversion.
///
/// Varyings are stored divided by the clip-space `w`, so they can be interpolated linearly
/// in window-space and multiplied back by the interpolated `w` for perspective-correct values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    /// Window-space position, in pixels
    pub position: Vector2<f32>,
    /// Depth value, already mapped into the depth range
    pub depth: f32,
    /// Reciprocal of the clip-space `w`
    pub inv_w: f32,
    /// Normalized device coordinates, used for face culling
    pub ndc: Vector2<f32>,
    /// Varyings divided by the clip-space `w`
    pub varyings: Varyings,
}

impl Interpolate for ScreenVertex {
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        ScreenVertex {
            position: Interpolate::barycentric_interpolate(u, &x1.position, v, &x2.position, w, &x3.position),
            depth: Interpolate::barycentric_interpolate(u, &x1.depth, v, &x2.depth, w, &x3.depth),
            inv_w: Interpolate::barycentric_interpolate(u, &x1.inv_w, v, &x2.inv_w, w, &x3.inv_w),
            ndc: Interpolate::barycentric_interpolate(u, &x1.ndc, v, &x2.ndc, w, &x3.ndc),
            varyings: Interpolate::barycentric_interpolate(u, &x1.varyings, v, &x2.varyings, w, &x3.varyings),
        }
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ScreenVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            depth: Interpolate::linear_interpolate(t, &x1.depth, &x2.depth),
            inv_w: Interpolate::linear_interpolate(t, &x1.inv_w, &x2.inv_w),
            ndc: Interpolate::linear_interpolate(t, &x1.ndc, &x2.ndc),
            varyings: Interpolate::linear_interpolate(t, &x1.varyings, &x2.varyings),
        }
    }
}

impl ScreenVertex {
    /// Performs the perspective divide and viewport transform on a clip-space vertex.
    ///
    /// Returns `None` when `w` is zero or the result isn't finite.
    /// A primitive with such a vertex is degenerate and gets skipped.
    pub fn from_clip(vertex: &ClipVertex, viewport: &Viewport, depth_range: &DepthRange) -> Option<ScreenVertex> {
        let w = vertex.position.w;

        if w == 0.0 || !w.is_finite() {
            return None;
        }

        let inv_w = 1.0 / w;

        let ndc = vertex.position.xyz() * inv_w;

        if !(ndc.x.is_finite() && ndc.y.is_finite() && ndc.z.is_finite()) {
            return None;
        }

        let (x, y) = viewport.map(ndc.x, ndc.y);

        Some(ScreenVertex {
            position: Vector2::new(x, y),
            depth: depth_range.map(ndc.z),
            inv_w,
            ndc: Vector2::new(ndc.x, ndc.y),
            varyings: vertex.varyings.scaled(inv_w),
        })
    }

    /// Equivalent of `gl_FragCoord`: window x, window y, depth and `1/w`
    #[inline]
    pub fn frag_coord(&self) -> Vector4<f32> {
        Vector4::new(self.position.x, self.position.y, self.depth, self.inv_w)
    }

    /// Restores the perspective-correct varyings by multiplying with `w`.
    ///
    /// If `inv_w` isn't positive and finite, which can only happen when extrapolating
    /// outside of a primitive, the varyings are zeroed.
    #[inline]
    pub fn perspective_varyings(&self) -> Varyings {
        if self.inv_w > 0.0 && self.inv_w.is_finite() {
            self.varyings.scaled(1.0 / self.inv_w)
        } else {
            self.varyings.zeroed()
        }
    }
}
