//! Fixed-size varying storage

use std::ops::Index;

use nalgebra::Vector4;

use crate::error::{RenderError, RenderResult};
use crate::interpolate::Interpolate;

/// Maximum number of varyings a vertex shader can pass on to the fragment shader.
///
/// One less than the number of vertex attributes, since the position is carried separately.
pub const MAX_VARYINGS: usize = 15;

/// Per-vertex values interpolated across a primitive, such as colors or texture coordinates.
///
/// Storage is a fixed array, so varyings never touch the heap,
/// only the first `len()` entries are active and interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Varyings {
    values: [Vector4<f32>; MAX_VARYINGS],
    count: usize,
}

impl Default for Varyings {
    #[inline]
    fn default() -> Varyings {
        Varyings { values: [Vector4::zeros(); MAX_VARYINGS], count: 0 }
    }
}

impl Varyings {
    /// Empty set of varyings
    #[inline]
    pub fn new() -> Varyings { Varyings::default() }

    /// Collects the given values into varyings.
    ///
    /// Panics if there are more than `MAX_VARYINGS` values. Use `try_from_slice` to handle that case.
    pub fn from_slice(values: &[Vector4<f32>]) -> Varyings {
        assert!(values.len() <= MAX_VARYINGS, "{} varyings exceeds the limit of {}", values.len(), MAX_VARYINGS);

        let mut varyings = Varyings::new();
        varyings.values[..values.len()].copy_from_slice(values);
        varyings.count = values.len();
        varyings
    }

    /// Collects the given values into varyings, or fails with `RenderError::TooManyVaryings`.
    pub fn try_from_slice(values: &[Vector4<f32>]) -> RenderResult<Varyings> {
        if values.len() > MAX_VARYINGS {
            return Err(RenderError::TooManyVaryings(values.len()));
        }

        Ok(Varyings::from_slice(values))
    }

    /// Appends a varying
    pub fn push(&mut self, value: Vector4<f32>) -> RenderResult<()> {
        if self.count == MAX_VARYINGS {
            return Err(RenderError::TooManyVaryings(self.count + 1));
        }

        self.values[self.count] = value;
        self.count += 1;

        Ok(())
    }

    /// Number of active varyings
    #[inline]
    pub fn len(&self) -> usize { self.count }

    #[inline]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vector4<f32>> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector4<f32>] {
        &self.values[..self.count]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Vector4<f32>] {
        &mut self.values[..self.count]
    }

    #[inline]
    pub fn iter(&self) -> ::std::slice::Iter<'_, Vector4<f32>> {
        self.as_slice().iter()
    }

    /// Multiplies every active varying by `s`
    #[inline]
    pub fn scaled(&self, s: f32) -> Varyings {
        let mut res = *self;

        for value in res.as_mut_slice() {
            *value *= s;
        }

        res
    }

    /// Zeroes all active varyings, keeping the count
    #[inline]
    pub fn zeroed(&self) -> Varyings {
        Varyings { values: [Vector4::zeros(); MAX_VARYINGS], count: self.count }
    }
}

impl Index<usize> for Varyings {
    type Output = Vector4<f32>;

    #[inline]
    fn index(&self, index: usize) -> &Vector4<f32> {
        &self.as_slice()[index]
    }
}

impl Interpolate for Varyings {
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        debug_assert!(x1.count == x2.count && x2.count == x3.count);

        let mut res = Varyings { values: [Vector4::zeros(); MAX_VARYINGS], count: x1.count };

        for i in 0..res.count {
            res.values[i] = Interpolate::barycentric_interpolate(u, &x1.values[i], v, &x2.values[i], w, &x3.values[i]);
        }

        res
    }

    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        debug_assert!(x1.count == x2.count);

        let mut res = Varyings { values: [Vector4::zeros(); MAX_VARYINGS], count: x1.count };

        for i in 0..res.count {
            res.values[i] = Interpolate::linear_interpolate(t, &x1.values[i], &x2.values[i]);
        }

        res
    }
}
