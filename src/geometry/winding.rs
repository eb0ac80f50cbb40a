//! Triangle vertex order

/// Order in which a triangle's vertices appear once projected.
///
/// Winding is measured in normalized device coordinates with the y-axis pointing up,
/// before the viewport transform. A closed mesh whose triangles all share one winding
/// shows the opposite winding for every triangle seen from behind, which is what face culling relies on.
///
/// ```text
///     CounterClockwise        Clockwise
///
///            c                    b
///           / \                  / \
///          /   \                /   \
///         a --- b              a --- c
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    Clockwise,
    CounterClockwise,
}

impl Default for FaceWinding {
    #[inline]
    fn default() -> FaceWinding { FaceWinding::CounterClockwise }
}

impl FaceWinding {
    /// Winding from twice the signed area of a triangle in a y-up system.
    ///
    /// Returns `None` for zero or non-finite areas.
    #[inline]
    pub fn from_signed_area(area: f32) -> Option<FaceWinding> {
        if area > 0.0 {
            Some(FaceWinding::CounterClockwise)
        } else if area < 0.0 {
            Some(FaceWinding::Clockwise)
        } else {
            None
        }
    }

    /// The opposite winding
    #[inline]
    pub fn reversed(self) -> FaceWinding {
        match self {
            FaceWinding::Clockwise => FaceWinding::CounterClockwise,
            FaceWinding::CounterClockwise => FaceWinding::Clockwise,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_winding_from_area() {
        assert_eq!(FaceWinding::from_signed_area(2.0), Some(FaceWinding::CounterClockwise));
        assert_eq!(FaceWinding::from_signed_area(-0.5), Some(FaceWinding::Clockwise));
        assert_eq!(FaceWinding::from_signed_area(0.0), None);
        assert_eq!(FaceWinding::from_signed_area(::std::f32::NAN), None);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(FaceWinding::Clockwise.reversed(), FaceWinding::CounterClockwise);
        assert_eq!(FaceWinding::default().reversed().reversed(), FaceWinding::default());
    }
}
