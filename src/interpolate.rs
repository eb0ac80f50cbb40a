//! Interpolation utilities

use std::ops::{Add, Mul};

use nalgebra::{Vector2, Vector3, Vector4};

/// Describes a type that can be interpolated, either linearly between two values
/// or with barycentric coordinates between three.
///
/// This is required for anything that travels between the clip, rasterization and fragment stages.
///
/// See [This document](https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf) for more information.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;

    /// Simple linear interpolation, returning `x1` at `t = 0` and `x2` at `t = 1`
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

/// Convenience method for interpolating three values with barycentric coordinates.
#[inline]
pub fn barycentric_interpolate<T>(u: f32, ux: T, v: f32, vx: T, w: f32, wx: T) -> T where T: Add<Output=T> + Mul<f32, Output=T> {
    ux * u + vx * v + wx * w
}

/// Convenience method for linearly interpolating two values
#[inline]
pub fn linear_interpolate<T>(t: f32, x1: T, x2: T) -> T where T: Add<Output=T> + Mul<f32, Output=T> {
    x1 * (1.0 - t) + x2 * t
}

impl Interpolate for () {
    #[inline(always)]
    fn barycentric_interpolate(_: f32, _: &Self, _: f32, _: &Self, _: f32, _: &Self) -> Self { () }

    #[inline(always)]
    fn linear_interpolate(_: f32, _: &Self, _: &Self) -> Self { () }
}

macro_rules! impl_copy_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn barycentric_interpolate(u: f32, ux: &$t, v: f32, vx: &$t, w: f32, wx: &$t) -> $t {
                    barycentric_interpolate(u, *ux, v, *vx, w, *wx)
                }

                #[inline(always)]
                fn linear_interpolate(t: f32, x1: &$t, x2: &$t) -> $t {
                    linear_interpolate(t, *x1, *x2)
                }
            }
        )+
    }
}

impl_copy_interpolate!(f32, Vector2<f32>, Vector3<f32>, Vector4<f32>);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linear_interpolate_vector() {
        let a = Vector4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vector4::new(2.0, 4.0, -2.0, 1.0);

        let mid = Interpolate::linear_interpolate(0.5, &a, &b);

        assert_eq!(mid, Vector4::new(1.0, 2.0, -1.0, 1.0));
    }

    #[test]
    fn test_barycentric_weights_select_vertices() {
        let (a, b, c) = (1.0f32, 5.0f32, 9.0f32);

        assert_eq!(<f32 as Interpolate>::barycentric_interpolate(1.0, &a, 0.0, &b, 0.0, &c), a);
        assert_eq!(<f32 as Interpolate>::barycentric_interpolate(0.0, &a, 1.0, &b, 0.0, &c), b);
        assert_eq!(<f32 as Interpolate>::barycentric_interpolate(0.0, &a, 0.0, &b, 1.0, &c), c);
    }
}
