//! Fragment shader stage

use nalgebra::Vector4;

use crate::framebuffer::Color;
use crate::geometry::Varyings;

/// Fragment returned by the fragment shader, which can either be a color
/// value for the pixel or a discard flag to skip that fragment altogether.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentOutput {
    /// Discard the fragment altogether, as if it was never there.
    Discard,
    /// Desired color for the pixel
    Color(Color),
}

impl From<Color> for FragmentOutput {
    #[inline]
    fn from(color: Color) -> FragmentOutput {
        FragmentOutput::Color(color)
    }
}

/// Fragment shader program.
///
/// The fragment shader is responsible for determining the color of pixels covered by a primitive.
/// It receives the equivalent of `gl_FragCoord` (window x, window y, depth and `1/w`)
/// and the perspective-correct varyings written by the vertex shader.
///
/// The depth test happens after the fragment shader, so discarded fragments never touch the depth buffer.
///
/// Any `Fn(&U, &Vector4<f32>, &Varyings) -> R` closure where `R: Into<FragmentOutput>` is a fragment shader,
/// so simple shaders can return a `Color` directly.
pub trait FragmentShader<U> {
    fn shade(&self, uniforms: &U, frag_coord: &Vector4<f32>, varyings: &Varyings) -> FragmentOutput;
}

impl<U, F, R> FragmentShader<U> for F where F: Fn(&U, &Vector4<f32>, &Varyings) -> R,
                                            R: Into<FragmentOutput> {
    #[inline]
    fn shade(&self, uniforms: &U, frag_coord: &Vector4<f32>, varyings: &Varyings) -> FragmentOutput {
        (*self)(uniforms, frag_coord, varyings).into()
    }
}
