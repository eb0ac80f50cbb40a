//! Viewport and depth range transforms

use super::Rect;

/// Affine mapping from normalized device coordinates to window coordinates.
///
/// There is no y-axis flip, window y grows with NDC y,
/// and row `y` of the render target holds window y in `[y, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Viewport {
        Viewport { x, y, width, height }
    }

    /// Viewport covering a whole target of the given size
    #[inline]
    pub fn with_size(width: u32, height: u32) -> Viewport {
        Viewport::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Maps NDC `x` and `y` in `[-1, 1]` to window coordinates
    #[inline]
    pub fn map(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        ((ndc_x + 1.0) * self.width * 0.5 + self.x,
         (ndc_y + 1.0) * self.height * 0.5 + self.y)
    }

    /// Pixels touched by the viewport, or `None` if it covers nothing
    pub fn rect(&self) -> Option<Rect> {
        let x0 = self.x.min(self.x + self.width).floor().max(0.0);
        let y0 = self.y.min(self.y + self.height).floor().max(0.0);
        let x1 = self.x.max(self.x + self.width).ceil().max(0.0);
        let y1 = self.y.max(self.y + self.height).ceil().max(0.0);

        if !(x0 < x1 && y0 < y1) {
            return None;
        }

        let clamp = |v: f32| v.min(u32::max_value() as f32) as u32;

        Some(Rect::new(clamp(x0), clamp(y0), clamp(x1), clamp(y1)))
    }
}

/// Mapping from NDC z in `[-1, 1]` to stored depth values.
///
/// Both ends are clamped to `[0, 1]` like `glDepthRange`. `near` may be greater than `far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    near: f32,
    far: f32,
}

impl Default for DepthRange {
    #[inline]
    fn default() -> DepthRange {
        DepthRange { near: 0.0, far: 1.0 }
    }
}

impl DepthRange {
    pub fn new(near: f32, far: f32) -> DepthRange {
        DepthRange {
            near: crate::math::saturate(near),
            far: crate::math::saturate(far),
        }
    }

    #[inline]
    pub fn near(&self) -> f32 { self.near }

    #[inline]
    pub fn far(&self) -> f32 { self.far }

    /// Maps NDC z to window depth
    #[inline]
    pub fn map(&self, ndc_z: f32) -> f32 {
        self.near + (ndc_z + 1.0) * 0.5 * (self.far - self.near)
    }
}
