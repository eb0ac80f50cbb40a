//! Render errors

use thiserror::Error;

use crate::primitive::PrimitiveType;

/// Errors produced while configuring or running the pipeline.
///
/// These are all programmer errors, e.g. a draw call without a bound shader.
/// Degenerate geometry never produces an error, it just doesn't show up in the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("No vertex shader is bound")]
    MissingVertexShader,
    #[error("No fragment shader is bound")]
    MissingFragmentShader,
    #[error("No index buffer is bound")]
    MissingIndexBuffer,
    #[error("No render target is bound")]
    MissingRenderTarget,
    #[error("Vertex attribute slot {0} is out of range")]
    AttributeIndexOutOfRange(usize),
    #[error("Vertex attribute slot {slot} is enabled but has no vertex buffer bound")]
    MissingVertexBuffer { slot: usize },
    #[error("Vertex {index} is out of range for the vertex buffer bound to slot {slot}")]
    VertexOutOfRange { slot: usize, index: u32 },
    #[error("{0} is not a valid attribute component count, must be between 1 and 4")]
    InvalidComponentCount(u8),
    #[error("{0} vertices is invalid for {1:?} primitive")]
    InvalidVertexCount(usize, PrimitiveType),
    #[error("Primitive vertices disagree on varying count, expected {expected} but found {found}")]
    VaryingCountMismatch { expected: usize, found: usize },
    #[error("{0} varyings exceeds the varying limit")]
    TooManyVaryings(usize),
    #[error("Buffer of {len} bytes cannot hold {width}x{height} pixels with a row stride of {stride} bytes")]
    InvalidBufferLayout { width: u32, height: u32, stride: usize, len: usize },
    #[error("Color and depth buffer dimensions do not match")]
    DimensionMismatch,
}

pub type RenderResult<T> = Result<T, RenderError>;
