//! Small numeric helpers on top of `nalgebra`
//!
//! Vectors and matrices (including determinants and inverses) come straight from `nalgebra`,
//! this module only holds the handful of scalar routines the pipeline stages share.

use num_traits::Float;

use nalgebra::{Matrix4, Vector2, Vector4};

/// Linear interpolation between `a` and `b`, returning `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn lerp<N: Float>(a: N, b: N, t: N) -> N {
    a + (b - a) * t
}

/// Edge function of the directed edge `a -> b` evaluated at `p`.
///
/// This is twice the signed area of the triangle `(a, b, p)`,
/// positive when `p` lies to the left of the edge in a y-up coordinate system.
///
/// See Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988).
#[inline]
pub fn edge_function<N: Float>(a: (N, N), b: (N, N), p: (N, N)) -> N {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Twice the signed area of a triangle, positive for counter-clockwise winding.
#[inline]
pub fn signed_double_area(a: &Vector2<f32>, b: &Vector2<f32>, c: &Vector2<f32>) -> f32 {
    edge_function((a.x, a.y), (b.x, b.y), (c.x, c.y))
}

/// Clamps a value into `[0, 1]`.
#[inline]
pub fn saturate<N: Float>(value: N) -> N {
    num_traits::clamp(value, N::zero(), N::one())
}

/// Transforms a point through a matrix, treating it as homogeneous.
///
/// Convenience for vertex shaders that take positions straight from attributes.
#[inline]
pub fn transform(matrix: &Matrix4<f32>, point: &Vector4<f32>) -> Vector4<f32> {
    matrix * point
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0f32, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0f32, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0f32, 6.0, 0.25), 3.0);
    }

    #[test]
    fn test_edge_function_sign() {
        // p to the left of a -> b
        assert!(edge_function((0.0f32, 0.0), (1.0, 0.0), (0.5, 1.0)) > 0.0);
        // p to the right
        assert!(edge_function((0.0f32, 0.0), (1.0, 0.0), (0.5, -1.0)) < 0.0);
        // p on the edge
        assert_eq!(edge_function((0.0f32, 0.0), (1.0, 0.0), (3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_signed_area_winding() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, 1.0);

        assert_eq!(signed_double_area(&a, &b, &c), 1.0);
        assert_eq!(signed_double_area(&a, &c, &b), -1.0);
    }

    #[test]
    fn test_matrix_inverse_roundtrip() {
        let m = Matrix4::new_translation(&nalgebra::Vector3::new(1.0, 2.0, 3.0)) * Matrix4::new_scaling(2.0);

        let inverse = m.try_inverse().expect("matrix is invertible");
        let p = Vector4::new(0.5, -1.0, 4.0, 1.0);

        let roundtrip = transform(&inverse, &transform(&m, &p));

        assert!((roundtrip - p).norm() < 1e-5);
        assert!((m.determinant() - 8.0).abs() < 1e-5);
    }
}
