use nalgebra::Vector4;

use crate::interpolate::Interpolate;

use super::Varyings;

/// Defines a vertex and its varyings in clip-space, which is produced by the vertex shader stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipVertex {
    /// Clip-space vertex position. This isn't very useful to the user unless normalized.
    pub position: Vector4<f32>,
    /// Any values to be interpolated and sent to the fragment shader,
    /// such as colors, normals, UV coordinates and whatever else.
    pub varyings: Varyings,
}

impl Interpolate for ClipVertex {
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        ClipVertex {
            position: Interpolate::barycentric_interpolate(u, &x1.position, v, &x2.position, w, &x3.position),
            varyings: Interpolate::barycentric_interpolate(u, &x1.varyings, v, &x2.varyings, w, &x3.varyings),
        }
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ClipVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            varyings: Interpolate::linear_interpolate(t, &x1.varyings, &x2.varyings),
        }
    }
}

impl ClipVertex {
    /// Creates a new `ClipVertex` from the given clip-space position and varyings
    #[inline(always)]
    pub fn new(position: Vector4<f32>, varyings: Varyings) -> ClipVertex {
        ClipVertex { position, varyings }
    }

    /// Creates a new `ClipVertex` without any varyings
    #[inline(always)]
    pub fn from_position(position: Vector4<f32>) -> ClipVertex {
        ClipVertex { position, varyings: Varyings::new() }
    }
}
