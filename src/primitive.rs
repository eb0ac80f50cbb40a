//! Primitive and topology definitions

/// Defines the kinds of primitives that can be rendered by themselves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PrimitiveType {
    /// Lines between two vertices
    Line,
    /// Triangles between three vertices
    Triangle,
}

impl PrimitiveType {
    /// Get's the number of vertices for the given primitive type
    #[inline]
    pub fn num_vertices(self) -> usize {
        match self {
            PrimitiveType::Line => 2,
            PrimitiveType::Triangle => 3,
        }
    }
}

/// How indices are grouped into primitives.
///
/// If you are unfamiliar with vertex indices, it's a way of re-using vertices for multiple primitives.
///
/// For example (in 2D), for a rectangle made of two triangles, you would define the four points for each corner vertex:
///
/// ```text
/// vertex #: name         = (x,   y)
/// 0:        bottom_left  = (0.0, 0.0)
/// 1:        top_left     = (0.0, 1.0)
/// 2:        bottom_right = (1.0, 0.0)
/// 3:        top_right    = (1.0, 1.0)
/// ```
///
/// then with `TriangleList` you'd have your index list be something like:
///
/// ```text
/// [0, 2, 1, // bottom half triangle
///  1, 2, 3] // top half triangle
/// ```
///
/// Note that both of those triangles go in a counter-clockwise direction from vertex to vertex.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Topology {
    /// Every two indices form a separate line
    LineList,
    /// Each index after the first forms a line with the previous one
    LineStrip,
    /// Every three indices form a separate triangle
    TriangleList,
    /// Each index after the second forms a triangle with the previous two,
    /// alternating order so all triangles keep the winding of the first
    TriangleStrip,
    /// Each index after the second forms a triangle with the previous one and the first index
    TriangleFan,
}

impl Topology {
    /// The primitive type this topology produces
    #[inline]
    pub fn primitive_type(self) -> PrimitiveType {
        match self {
            Topology::LineList | Topology::LineStrip => PrimitiveType::Line,
            Topology::TriangleList | Topology::TriangleStrip | Topology::TriangleFan => PrimitiveType::Triangle,
        }
    }
}

/// A primitive re-assembled from a clipped polygon,
/// holding indices into that polygon's vertices.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum AssembledPrimitive {
    Line([usize; 2]),
    Triangle([usize; 3]),
}
