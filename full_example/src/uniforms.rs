use nalgebra::{Vector4, Matrix4};

use softraster::{Sampler, Texture2D};

use crate::light::PointLight;

/// Define global uniforms. These don't need to be interpolated, so they can just be any type.
pub struct GlobalUniforms<'t> {
    pub camera: Vector4<f32>,
    pub model: Matrix4<f32>,
    /// the inverse transpose of the model matrix is
    /// multiplied by the normal vector to get the correct value
    pub model_inverse_transpose: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    pub lights: Vec<PointLight>,
    pub texture: Texture2D<'t>,
    pub sampler: Sampler,
}

/// Varying slots written by the vertex shader
pub const WORLD_POSITION: usize = 0;
pub const NORMAL: usize = 1;
pub const UV: usize = 2;
