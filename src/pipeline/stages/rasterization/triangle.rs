use crate::geometry::{Coordinate, FaceWinding, ScreenVertex};
use crate::interpolate::Interpolate;
use crate::math::{edge_function, signed_double_area};

use super::{pixel_rect, walk_quads, Quad, RasterArguments, RasterOutcome};

/// Rasterizes a triangle, emitting quads of fragments with perspective-correct varyings.
///
/// A pixel is covered when its center lies inside the triangle or exactly on one of its edges.
/// Culling uses the winding in normalized device coordinates.
pub fn rasterize_triangle<E>(args: &RasterArguments,
                             a: &ScreenVertex,
                             b: &ScreenVertex,
                             c: &ScreenVertex,
                             emit: &mut E) -> RasterOutcome where E: FnMut(&Quad) {
    let winding = match FaceWinding::from_signed_area(signed_double_area(&a.ndc, &b.ndc, &c.ndc)) {
        Some(winding) => winding,
        None => return RasterOutcome::Degenerate,
    };

    if args.cull_mode.culls(winding == args.front_face) {
        return RasterOutcome::Culled;
    }

    let area = signed_double_area(&a.position, &b.position, &c.position);

    if area == 0.0 || !area.is_finite() {
        return RasterOutcome::Degenerate;
    }

    let (x1, y1) = (a.position.x, a.position.y);
    let (x2, y2) = (b.position.x, b.position.y);
    let (x3, y3) = (c.position.x, c.position.y);

    let bounds = match pixel_rect(x1.min(x2).min(x3).floor(),
                                  y1.min(y2).min(y3).floor(),
                                  x1.max(x2).max(x3).ceil(),
                                  y1.max(y2).max(y3).ceil(), &args.clip_rect) {
        Some(bounds) => bounds,
        None => return RasterOutcome::Rasterized,
    };

    // Barycentric coordinates of a pixel center
    let weights = |coord: Coordinate| {
        let p = coord.center();

        (edge_function((x2, y2), (x3, y3), p) / area,
         edge_function((x3, y3), (x1, y1), p) / area,
         edge_function((x1, y1), (x2, y2), p) / area)
    };

    walk_quads(&bounds, |coord| {
        let (u, v, w) = weights(coord);
        u >= 0.0 && v >= 0.0 && w >= 0.0
    }, |coord| {
        let (u, v, w) = weights(coord);
        Interpolate::barycentric_interpolate(u, a, v, b, w, c)
    }, emit);

    RasterOutcome::Rasterized
}
