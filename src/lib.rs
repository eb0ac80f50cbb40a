//! CPU-only Fixed-Function Rendering Pipeline in Rust
//!
//! [Documentation](https://docs.rs/softraster/)
//!
//! ### Example:
//!
//! See the `full_example` project, which renders a textured, lit cube to a PNG file.
//!
//! ### Current Features:
//!
//! * Rendering pipeline with user-defined vertex and fragment shaders, given as plain closures.
//! * Vertex fetch from interleaved byte buffers with up to 16 attribute slots.
//! * 16 and 32-bit indices, with list, strip and fan topologies for lines and triangles.
//! * Clipping against the full view volume, so geometry at the edge of the screen or behind the camera is handled correctly.
//! * Perspective-correct interpolation of up to 15 varyings.
//! * Triangles are shaded in 2x2 quads, with helper fragments for neighbors outside the triangle.
//! * Face culling, scissor rectangle and all eight depth comparison functions.
//! * Render targets borrow caller memory, with packed RGBA or BGRA colors and 24-bit or `f32` depth.
//! * Post-transform vertex cache.
//! * Simple 2D texture sampling with nearest or bilinear filtering.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.
//!
//! ### Not Planned:
//!
//! * Blending, everything is opaque
//! * Stencil buffer
//! * Multi-threading

#[macro_use]
extern crate log;

pub mod error;
pub mod math;
pub mod interpolate;
pub mod geometry;
pub mod primitive;
pub mod framebuffer;
pub mod texture;
pub mod pipeline;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use interpolate::Interpolate;
pub use geometry::{
    ClipVertex, Coordinate, DepthRange, Dimensions, FaceWinding, HasDimensions, Rect, ScreenVertex, Varyings, Viewport,
    MAX_VARYINGS,
};
pub use primitive::{PrimitiveType, Topology};
pub use framebuffer::{Color, ColorBuffer, ColorFormat, DepthBuffer, DepthFormat, RenderTarget};
pub use texture::{Edge, Filter, Sampler, Texture2D};
pub use pipeline::{
    Attributes, ComponentFormat, CullMode, DepthFunc, DepthState, DrawStats, FragmentOutput, FragmentShader,
    IndexBuffer, InputLayout, RasterizerState, RenderingContext, VertexAttribute, VertexShader,
    MAX_VERTEX_ATTRIBUTES, POSITION_ATTRIBUTE,
};

#[cfg(feature = "image_compat")]
pub use image_compat::CopyToImage;
