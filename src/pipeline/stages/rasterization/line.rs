use crate::geometry::{Coordinate, ScreenVertex};
use crate::geometry::line::{intersects_pixel_diamond, liang_barsky_iterative};
use crate::interpolate::Interpolate;

use super::{pixel_rect, walk_quads, Quad, RasterArguments, RasterOutcome};

/// Rasterizes a line, emitting quads of fragments with perspective-correct varyings.
///
/// A pixel is covered when the segment crosses the half-open diamond inscribed in it, so lines are
/// one pixel thick along their major axis without gaps, even when they run along pixel boundaries. Values are interpolated at the
/// projection of each pixel center onto the segment.
pub fn rasterize_line<E>(args: &RasterArguments,
                         start: &ScreenVertex,
                         end: &ScreenVertex,
                         emit: &mut E) -> RasterOutcome where E: FnMut(&Quad) {
    let p0 = (start.position.x, start.position.y);
    let p1 = (end.position.x, end.position.y);

    let direction = end.position - start.position;
    let length_squared = direction.norm_squared();

    if length_squared == 0.0 || !length_squared.is_finite() {
        return RasterOutcome::Degenerate;
    }

    let clip = &args.clip_rect;

    // Pad by one pixel so diamonds on the clip rectangle's edge can still be hit
    let padded = ((clip.min.x as f32 - 1.0, clip.min.y as f32 - 1.0),
                  (clip.max.x as f32 + 1.0, clip.max.y as f32 + 1.0));

    let ((x1, y1), (x2, y2)) = match liang_barsky_iterative(p0, p1, padded) {
        Some(segment) => segment,
        None => return RasterOutcome::Rasterized,
    };

    // Diamonds of pixel `k` span a little less than `[k, k + 1]`, shifted towards zero
    let bounds = match pixel_rect((x1.min(x2) - 1.0).ceil(),
                                  (y1.min(y2) - 1.0).ceil(),
                                  x1.max(x2).floor() + 2.0,
                                  y1.max(y2).floor() + 2.0, clip) {
        Some(bounds) => bounds,
        None => return RasterOutcome::Rasterized,
    };

    walk_quads(&bounds, |coord| {
        intersects_pixel_diamond(p0, p1, coord.x as i64, coord.y as i64)
    }, |coord: Coordinate| {
        let (x, y) = coord.center();

        let t = ((x - p0.0) * direction.x + (y - p0.1) * direction.y) / length_squared;

        Interpolate::linear_interpolate(t.max(0.0).min(1.0), start, end)
    }, emit);

    RasterOutcome::Rasterized
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::*;
    use crate::geometry::{ClipVertex, DepthRange, FaceWinding, Rect, Varyings, Viewport};
    use crate::pipeline::state::CullMode;

    fn screen(x: f32, y: f32, varying: f32) -> ScreenVertex {
        let vertex = ClipVertex::new(Vector4::new(x, y, 0.0, 1.0), Varyings::from_slice(&[Vector4::repeat(varying)]));

        ScreenVertex::from_clip(&vertex, &Viewport::with_size(4, 4), &DepthRange::default()).unwrap()
    }

    fn rasterize(start: &ScreenVertex, end: &ScreenVertex) -> (RasterOutcome, Vec<(u32, u32, f32)>) {
        let args = RasterArguments {
            clip_rect: Rect::new(0, 0, 4, 4),
            cull_mode: CullMode::Back,
            front_face: FaceWinding::CounterClockwise,
        };

        let mut pixels = Vec::new();

        let outcome = rasterize_line(&args, start, end, &mut |quad: &Quad| {
            for f in quad.iter().filter(|f| f.covered) {
                pixels.push((f.coord.x, f.coord.y, f.varyings[0].x));
            }
        });

        pixels.sort_by_key(|&(x, y, _)| (y, x));

        (outcome, pixels)
    }

    #[test]
    fn test_horizontal_line() {
        // Window coordinates (0.5, 0.5) to (3.5, 0.5)
        let (outcome, pixels) = rasterize(&screen(-0.75, -0.75, 0.0), &screen(0.75, -0.75, 3.0));

        assert_eq!(outcome, RasterOutcome::Rasterized);

        let coords: Vec<_> = pixels.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);

        // Interpolated along the line
        for &(x, _, value) in &pixels {
            assert!((value - x as f32).abs() < 1e-5);
        }
    }

    #[test]
    fn test_line_on_row_boundary() {
        // Window coordinates (0.5, 1.0) to (3.5, 1.0)
        let (_, pixels) = rasterize(&screen(-0.75, -0.5, 0.0), &screen(0.75, -0.5, 3.0));

        let coords: Vec<_> = pixels.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_line_leaving_target() {
        let (_, pixels) = rasterize(&screen(-0.75, -0.75, 0.0), &screen(3.0, -0.75, 0.0));

        assert_eq!(pixels.len(), 4);
        assert!(pixels.iter().all(|&(x, y, _)| x < 4 && y == 0));
    }

    #[test]
    fn test_zero_length_line() {
        let (outcome, pixels) = rasterize(&screen(0.1, 0.1, 0.0), &screen(0.1, 0.1, 0.0));

        assert_eq!(outcome, RasterOutcome::Degenerate);
        assert!(pixels.is_empty());
    }
}
