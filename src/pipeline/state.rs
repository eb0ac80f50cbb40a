//! Fixed-function pipeline state
//!
//! Every state struct defaults to the OpenGL defaults.

use crate::geometry::{FaceWinding, Rect};

/// Which faces of a triangle are discarded before rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    None,
    Front,
    Back,
    FrontAndBack,
}

impl Default for CullMode {
    #[inline]
    fn default() -> CullMode { CullMode::None }
}

impl CullMode {
    /// Checks if a triangle facing the given way is culled
    #[inline]
    pub fn culls(self, is_front: bool) -> bool {
        match self {
            CullMode::None => false,
            CullMode::Front => is_front,
            CullMode::Back => !is_front,
            CullMode::FrontAndBack => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterizerState {
    pub cull_mode: CullMode,
    /// Winding of front-facing triangles in normalized device coordinates
    pub front_face: FaceWinding,
    /// Optional scissor rectangle, in pixels
    pub scissor: Option<Rect>,
}

/// Comparison between an incoming fragment depth and the stored depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl Default for DepthFunc {
    #[inline]
    fn default() -> DepthFunc { DepthFunc::Less }
}

impl DepthFunc {
    /// Returns true if the incoming depth passes against the stored depth
    #[inline]
    pub fn test(self, incoming: f32, stored: f32) -> bool {
        match self {
            DepthFunc::Never => false,
            DepthFunc::Less => incoming < stored,
            DepthFunc::Equal => incoming == stored,
            DepthFunc::LessEqual => incoming <= stored,
            DepthFunc::Greater => incoming > stored,
            DepthFunc::NotEqual => incoming != stored,
            DepthFunc::GreaterEqual => incoming >= stored,
            DepthFunc::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthState {
    pub test_enabled: bool,
    pub write_enabled: bool,
    pub func: DepthFunc,
}

impl Default for DepthState {
    fn default() -> DepthState {
        DepthState {
            test_enabled: true,
            write_enabled: true,
            func: DepthFunc::Less,
        }
    }
}
