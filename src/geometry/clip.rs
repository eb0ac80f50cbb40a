//! Clipping planes

use crate::interpolate::Interpolate;

use super::ClipVertex;

/// One of the six canonical clip-space half-spaces, `-w <= x, y, z <= w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClippingPlane {
    /// `-X` plane, `x >= -w`
    Left,
    /// `+X` plane, `x <= w`
    Right,
    /// `-Y` plane, `y >= -w`
    Bottom,
    /// `+Y` plane, `y <= w`
    Top,
    /// `-Z` plane, `z >= -w`
    Near,
    /// `+Z` plane, `z <= w`
    Far,
}

/// All clipping planes in a constant array, in the order they are clipped against.
pub const ALL_CLIPPING_PLANES: [ClippingPlane; 6] = [
    ClippingPlane::Left,
    ClippingPlane::Right,
    ClippingPlane::Bottom,
    ClippingPlane::Top,
    ClippingPlane::Near,
    ClippingPlane::Far
];

impl ClippingPlane {
    /// Position component and sign the plane bounds
    #[inline]
    fn axis(self) -> (usize, f32) {
        match self {
            ClippingPlane::Left => (0, -1.0),
            ClippingPlane::Right => (0, 1.0),
            ClippingPlane::Bottom => (1, -1.0),
            ClippingPlane::Top => (1, 1.0),
            ClippingPlane::Near => (2, -1.0),
            ClippingPlane::Far => (2, 1.0),
        }
    }

    /// Boundary distance `w - sign * component`, non-negative on the inside
    #[inline]
    pub fn distance(self, v: &ClipVertex) -> f32 {
        let (axis, sign) = self.axis();

        v.position.w - sign * v.position[axis]
    }

    /// Check if the clipping plane has the given clip-space point inside of it
    #[inline]
    pub fn has_inside(self, v: &ClipVertex) -> bool {
        self.distance(v) >= 0.0
    }

    /// Find the intersection of the edge `from -> to` and the clipping plane.
    ///
    /// Every field of the vertex is interpolated, starting at `from`.
    #[inline]
    pub fn intersect(self, from: &ClipVertex, to: &ClipVertex) -> ClipVertex {
        let a = self.distance(from);
        let b = self.distance(to);

        let t = a / (a - b);

        Interpolate::linear_interpolate(t, from, to)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::*;

    #[test]
    fn test_plane_distances() {
        let v = ClipVertex::from_position(Vector4::new(0.5, -2.0, 1.0, 1.0));

        assert_eq!(ClippingPlane::Left.distance(&v), 1.5);
        assert_eq!(ClippingPlane::Right.distance(&v), 0.5);
        assert_eq!(ClippingPlane::Bottom.distance(&v), -1.0);
        assert_eq!(ClippingPlane::Top.distance(&v), 3.0);
        assert_eq!(ClippingPlane::Near.distance(&v), 2.0);
        assert_eq!(ClippingPlane::Far.distance(&v), 0.0);

        assert!(!ClippingPlane::Bottom.has_inside(&v));
        assert!(ClippingPlane::Far.has_inside(&v));
    }

    #[test]
    fn test_intersection_lies_on_plane() {
        let inside = ClipVertex::from_position(Vector4::new(0.0, 0.0, 0.0, 1.0));
        let outside = ClipVertex::from_position(Vector4::new(3.0, 1.0, 0.0, 1.0));

        let hit = ClippingPlane::Right.intersect(&inside, &outside);

        assert!(ClippingPlane::Right.distance(&hit).abs() < 1e-6);
        assert!((hit.position.y - 1.0 / 3.0).abs() < 1e-6);
    }
}
