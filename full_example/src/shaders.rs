use nalgebra::{Vector2, Vector3, Vector4};

use softraster::{Attributes, ClipVertex, Color, Varyings};

use crate::color::{to_linear, to_srgb, tonemap};
use crate::mesh;
use crate::uniforms::{self, GlobalUniforms};

pub fn vertex_shader(global_uniforms: &GlobalUniforms, attributes: &Attributes) -> ClipVertex {
    let GlobalUniforms { ref view, ref projection, ref model, ref model_inverse_transpose, .. } = *global_uniforms;

    let position = attributes[mesh::POSITION];
    let normal = attributes[mesh::NORMAL];

    let world_position = model * position;

    // Normals are directions, so drop the default w of 1
    let normal = (model_inverse_transpose * Vector4::new(normal.x, normal.y, normal.z, 0.0)).normalize();

    let clip_position = projection * view * world_position;

    // Return the clip-space position and any varyings to interpolate and pass into the fragment shader
    ClipVertex::new(clip_position, Varyings::from_slice(&[world_position, normal, attributes[mesh::UV]]))
}

/// Schlick's approximation of the Fresnel reflectance for a dielectric with index of refraction `ior`
fn fresnel_schlick(cos_theta: f32, ior: f32) -> f32 {
    let f0 = ((1.0 - ior) / (1.0 + ior)).powi(2);

    f0 + (1.0 - f0) * (1.0 - cos_theta).powi(5)
}

const SHININESS: f32 = 128.0;
const ALBEDO: f32 = 0.7;
const IOR: f32 = 1.45;

/// Blinn-Phong lighting of the sampled texture, blended with a Fresnel term
pub fn fragment_shader(global_uniforms: &GlobalUniforms, _frag_coord: &Vector4<f32>, varyings: &Varyings) -> Color {
    let GlobalUniforms { ref camera, ref lights, ref texture, ref sampler, .. } = *global_uniforms;

    let position = varyings[uniforms::WORLD_POSITION];
    // Interpolated normals are no longer unit length
    let normal = varyings[uniforms::NORMAL].normalize();
    let uv = varyings[uniforms::UV];

    let view = (camera - position).normalize();

    let base = to_linear(texture.sample(&Vector2::new(uv.x, uv.y), sampler)).xyz() * ALBEDO;

    let radiance = lights.iter().fold(Vector3::zeros(), |sum: Vector3<f32>, light| {
        let incoming = light.direction_from(&position);
        let halfway = (incoming + view).normalize();

        let n_dot_l = normal.dot(&incoming).max(0.0);
        let n_dot_h = normal.dot(&halfway).max(0.0);

        let fresnel = fresnel_schlick(view.dot(&halfway).max(0.0).min(1.0), IOR);

        let diffuse = base * ((1.0 - fresnel) * n_dot_l);
        let specular = Vector3::repeat(fresnel * n_dot_h.powf(SHININESS));

        sum + (diffuse + specular).component_mul(&light.radiance)
    });

    to_srgb(tonemap(radiance.push(1.0)))
}
