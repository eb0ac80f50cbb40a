//! Scan conversion of lines and triangles into 2x2 fragment quads

use nalgebra::Vector4;

use crate::geometry::{Coordinate, FaceWinding, Rect, ScreenVertex, Varyings};
use crate::pipeline::state::CullMode;

pub mod line;
pub mod triangle;

pub use self::line::rasterize_line;
pub use self::triangle::rasterize_triangle;

/// A single sample produced by rasterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Pixel of the render target
    pub coord: Coordinate,
    /// Window x and y of the pixel center, interpolated depth and `1/w`, like `gl_FragCoord`
    pub frag_coord: Vector4<f32>,
    /// Perspective-correct varyings
    pub varyings: Varyings,
    /// False for helper fragments, which only exist to complete a quad
    pub covered: bool,
}

impl Fragment {
    #[inline]
    fn new(coord: Coordinate, vertex: &ScreenVertex, covered: bool) -> Fragment {
        let (x, y) = coord.center();

        let mut frag_coord = vertex.frag_coord();

        // Sample at the pixel center rather than the interpolated position
        frag_coord.x = x;
        frag_coord.y = y;

        Fragment {
            coord,
            frag_coord,
            varyings: vertex.perspective_varyings(),
            covered,
        }
    }
}

/// Fragments of an aligned 2x2 pixel block, in the order
/// `(x, y)`, `(x + 1, y)`, `(x, y + 1)`, `(x + 1, y + 1)`.
pub type Quad = [Fragment; 4];

/// Rasterizer configuration for a single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterArguments {
    /// Pixels that may be written, the overlap of viewport, render target and scissor
    pub clip_rect: Rect,
    pub cull_mode: CullMode,
    pub front_face: FaceWinding,
}

/// What happened to a primitive during rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterOutcome {
    Rasterized,
    Culled,
    Degenerate,
}

/// Converts a range of pixel indices, start inclusive and end exclusive,
/// into a rectangle clamped to the clip rectangle.
pub(crate) fn pixel_rect(x0: f32, y0: f32, x1: f32, y1: f32, clip: &Rect) -> Option<Rect> {
    let x0 = x0.max(clip.min.x as f32);
    let y0 = y0.max(clip.min.y as f32);
    let x1 = x1.min(clip.max.x as f32);
    let y1 = y1.min(clip.max.y as f32);

    if x0 < x1 && y0 < y1 {
        Some(Rect::new(x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    } else {
        None
    }
}

/// Walks aligned 2x2 quads over `bounds`, emitting every quad with at least one covered pixel.
///
/// Pixels outside `bounds` are never covered, but still become helper fragments.
pub(crate) fn walk_quads<C, I, E>(bounds: &Rect, covers: C, interpolate: I, emit: &mut E)
    where C: Fn(Coordinate) -> bool,
          I: Fn(Coordinate) -> ScreenVertex,
          E: FnMut(&Quad) {
    let mut y = bounds.min.y & !1;

    while y < bounds.max.y {
        let mut x = bounds.min.x & !1;

        while x < bounds.max.x {
            let coords = [
                Coordinate::new(x, y),
                Coordinate::new(x + 1, y),
                Coordinate::new(x, y + 1),
                Coordinate::new(x + 1, y + 1),
            ];

            let mut coverage = [false; 4];

            for (covered, &coord) in coverage.iter_mut().zip(&coords) {
                *covered = bounds.contains(coord.x as i64, coord.y as i64) && covers(coord);
            }

            if coverage.iter().any(|&covered| covered) {
                let fragment = |i: usize| Fragment::new(coords[i], &interpolate(coords[i]), coverage[i]);

                emit(&[fragment(0), fragment(1), fragment(2), fragment(3)]);
            }

            x += 2;
        }

        y += 2;
    }
}
