//! Clip stage

use smallvec::SmallVec;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{ClipVertex, ALL_CLIPPING_PLANES};
use crate::primitive::PrimitiveType;

/// Inline capacity of a clipped polygon.
///
/// A triangle gains at most one vertex per clipping plane, so cutting it with the four side planes
/// gives at most a heptagon. Triangles also crossing the near or far plane can exceed this.
pub const MAX_CLIPPED_VERTICES: usize = 7;

/// Output of the clip stage, ordered and keeping the winding of the input
pub type ClippedPolygon = SmallVec<[ClipVertex; MAX_CLIPPED_VERTICES]>;

/// Clips a primitive's clip-space vertices against the view volume.
///
/// Returns an empty polygon if nothing is left, two vertices for a visible line,
/// or a convex polygon of 3 or more vertices for a visible triangle.
pub fn clip_primitive(vertices: &[ClipVertex], primitive: PrimitiveType) -> RenderResult<ClippedPolygon> {
    debug_assert_eq!(vertices.len(), primitive.num_vertices());

    if vertices.len() != primitive.num_vertices() {
        return Err(RenderError::InvalidVertexCount(vertices.len(), primitive));
    }

    check_varyings(vertices)?;

    Ok(match primitive {
        PrimitiveType::Line => match clip_line(&vertices[0], &vertices[1]) {
            Some((start, end)) => {
                let mut polygon = ClippedPolygon::new();
                polygon.push(start);
                polygon.push(end);
                polygon
            }
            None => ClippedPolygon::new(),
        },
        PrimitiveType::Triangle => clip_polygon(vertices),
    })
}

/// Every vertex of a primitive must carry the same number of varyings
pub fn check_varyings(vertices: &[ClipVertex]) -> RenderResult<()> {
    if let Some(first) = vertices.first() {
        let expected = first.varyings.len();

        for vertex in &vertices[1..] {
            if vertex.varyings.len() != expected {
                return Err(RenderError::VaryingCountMismatch { expected, found: vertex.varyings.len() });
            }
        }
    }

    Ok(())
}

/// Clips a line against each plane in turn.
///
/// An endpoint outside a plane is moved onto it. If both are outside the same plane,
/// the line is discarded right away.
pub fn clip_line(start: &ClipVertex, end: &ClipVertex) -> Option<(ClipVertex, ClipVertex)> {
    let (mut start, mut end) = (*start, *end);

    for plane in &ALL_CLIPPING_PLANES {
        let start_in = plane.has_inside(&start);
        let end_in = plane.has_inside(&end);

        match (start_in, end_in) {
            (false, false) => return None,
            (false, true) => start = plane.intersect(&start, &end),
            (true, false) => end = plane.intersect(&start, &end),
            (true, true) => {}
        }
    }

    Some((start, end))
}

/// Sutherland-Hodgman clipping of a convex polygon against all six planes.
///
/// Any convex polygon is accepted. Results with more than `MAX_CLIPPED_VERTICES` vertices
/// spill onto the heap and are logged, no vertex is ever dropped.
pub fn clip_polygon(vertices: &[ClipVertex]) -> ClippedPolygon {
    let mut input: ClippedPolygon = vertices.iter().cloned().collect();
    let mut output = ClippedPolygon::new();

    for plane in &ALL_CLIPPING_PLANES {
        if input.len() < 3 {
            break;
        }

        output.clear();

        let mut previous = &input[input.len() - 1];

        for current in &input {
            let current_in = plane.has_inside(current);
            let previous_in = plane.has_inside(previous);

            if current_in {
                if !previous_in {
                    // Entering
                    output.push(plane.intersect(current, previous));
                }

                output.push(*current);
            } else if previous_in {
                // Leaving
                output.push(plane.intersect(previous, current));
            }

            previous = current;
        }

        ::std::mem::swap(&mut input, &mut output);
    }

    if input.len() < 3 {
        input.clear();
    }

    if input.spilled() {
        warn!("Clipped polygon of {} vertices exceeded the inline capacity of {}", input.len(), MAX_CLIPPED_VERTICES);
    }

    input
}
