//! Vertex shader stage

use crate::error::RenderResult;
use crate::geometry::ClipVertex;
use crate::pipeline::cache::VertexCache;

use super::input::{fetch_attributes, Attributes, InputLayout, MAX_VERTEX_ATTRIBUTES};

/// Vertex shader program.
///
/// The vertex shader is responsible for transforming the attributes of each vertex into clip-space,
/// which usually involves transforming object-space coordinates to world-space, then to camera-space,
/// then finally to projection/clip-space. Anything the fragment shader needs to know about the vertex
/// is passed on as varyings:
///
/// ```ignore
/// context.set_vertex_shader(|uniforms: &Uniforms, attributes: &Attributes| {
///     let world_position = uniforms.model * attributes[0];
///     let normal = uniforms.normal_matrix * attributes[1];
///
///     ClipVertex::new(uniforms.projection * uniforms.view * world_position,
///                     Varyings::from_slice(&[world_position, normal, attributes[2]]))
/// });
/// ```
///
/// Any `Fn(&U, &Attributes) -> ClipVertex` closure is a vertex shader.
pub trait VertexShader<U> {
    fn shade(&self, uniforms: &U, attributes: &Attributes) -> ClipVertex;
}

impl<U, F> VertexShader<U> for F where F: Fn(&U, &Attributes) -> ClipVertex {
    #[inline]
    fn shade(&self, uniforms: &U, attributes: &Attributes) -> ClipVertex {
        (*self)(uniforms, attributes)
    }
}

/// Everything needed to shade a vertex by its index
pub(crate) struct VertexStage<'s, 'a: 's, U: 's> {
    pub shader: &'s dyn VertexShader<U>,
    pub uniforms: &'s U,
    pub layout: &'s InputLayout,
    pub buffers: &'s [Option<&'a [u8]>; MAX_VERTEX_ATTRIBUTES],
}

impl<'s, 'a: 's, U: 's> VertexStage<'s, 'a, U> {
    /// Fetches and shades vertex `index`, or returns its cached result.
    ///
    /// The boolean is true on a cache hit.
    pub fn run(&self, cache: &mut VertexCache, index: u32) -> RenderResult<(ClipVertex, bool)> {
        if let Some(vertex) = cache.get(index) {
            return Ok((*vertex, true));
        }

        let attributes = fetch_attributes(self.layout, self.buffers, index)?;

        let vertex = self.shader.shade(self.uniforms, &attributes);

        cache.insert(index, vertex);

        Ok((vertex, false))
    }
}
