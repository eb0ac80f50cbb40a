//! 2D line segment helpers used by line rasterization

use num_traits::{Float, One, Zero};

/// Clips the segment `start -> end` to the rectangle `bounds = ((xmin, ymin), (xmax, ymax))`.
///
/// Returns `None` if the segment lies completely outside.
#[inline]
pub fn liang_barsky_iterative<T: Float>(start: (T, T), end: (T, T), bounds: ((T, T), (T, T))) -> Option<((T, T), (T, T))> {
    let ((xmin, ymin), (xmax, ymax)) = bounds;

    let (x1, y1) = start;
    let (x2, y2) = end;

    let mut t0 = Zero::zero();
    let mut t1 = One::one();

    let dx = x2 - x1;
    let dy = y2 - y1;

    for edge in 0..4 {
        let (p, q) = match edge {
            0 => (-dx, -(xmin - x1)),
            1 => (dx, (xmax - x1)),
            2 => (-dy, -(ymin - y1)),
            _ => (dy, (ymax - y1)),
        };

        if p.is_zero() {
            // Parallel to this edge, so either fully outside or unconstrained by it
            if q < Zero::zero() {
                return None;
            }
        } else {
            let r = q / p;

            if p < Zero::zero() {
                if r > t1 {
                    return None;
                } else if r > t0 {
                    t0 = r;
                }
            } else if r < t0 {
                return None;
            } else if r < t1 {
                t1 = r;
            }
        }
    }

    let x1clip = x1 + t0 * dx;
    let y1clip = y1 + t0 * dy;
    let x2clip = x1 + t1 * dx;
    let y2clip = y1 + t1 * dy;

    Some(((x1clip, y1clip), (x2clip, y2clip)))
}

#[inline]
fn orientation<T: Float>(a: (T, T), b: (T, T), p: (T, T)) -> T {
    crate::math::edge_function(a, b, p)
}

/// Checks if `p`, known to be collinear with `a -> b`, lies within the segment's bounds
#[inline]
fn on_segment<T: Float>(a: (T, T), b: (T, T), p: (T, T)) -> bool {
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) &&
        p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}

/// Tests if the closed segments `p1 -> p2` and `q1 -> q2` intersect, endpoints included.
pub fn segments_intersect<T: Float>(p1: (T, T), p2: (T, T), q1: (T, T), q2: (T, T)) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    let zero = T::zero();

    if ((d1 > zero && d2 < zero) || (d1 < zero && d2 > zero)) &&
        ((d3 > zero && d4 < zero) || (d3 < zero && d4 > zero)) {
        return true;
    }

    (d1 == zero && on_segment(q1, q2, p1)) ||
        (d2 == zero && on_segment(q1, q2, p2)) ||
        (d3 == zero && on_segment(p1, p2, q1)) ||
        (d4 == zero && on_segment(p1, p2, q2))
}

/// Offset applied to pixel diamonds, a small power of two so the shifted corners stay exact
const DIAMOND_BIAS: f32 = 1.0 / 512.0;

/// Tests if a segment crosses the diamond inscribed in pixel `(x, y)`,
/// whose corners sit at the midpoints of the pixel's edges.
///
/// The diamond is half-open: its top and right corners and its upper-right edge belong to the
/// neighboring diamonds, so a segment running exactly along a pixel boundary only covers one row or column.
/// This is done by testing against a closed diamond shifted a fraction of a pixel down and to the left.
pub fn intersects_pixel_diamond(start: (f32, f32), end: (f32, f32), x: i64, y: i64) -> bool {
    let px = x as f32 - DIAMOND_BIAS;
    let py = y as f32 - DIAMOND_BIAS;

    let bottom = (px + 0.5, py);
    let right = (px + 1.0, py + 0.5);
    let top = (px + 0.5, py + 1.0);
    let left = (px, py + 0.5);

    segments_intersect(start, end, bottom, right) ||
        segments_intersect(start, end, right, top) ||
        segments_intersect(start, end, top, left) ||
        segments_intersect(start, end, left, bottom) ||
        diamond_contains(start, x, y)
}

/// Tests if a point lies inside the shifted diamond of pixel `(x, y)`
#[inline]
fn diamond_contains(p: (f32, f32), x: i64, y: i64) -> bool {
    let dx = p.0 - (x as f32 + 0.5 - DIAMOND_BIAS);
    let dy = p.1 - (y as f32 + 0.5 - DIAMOND_BIAS);

    dx.abs() + dy.abs() <= 0.5
}
