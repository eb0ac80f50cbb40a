//! Shader geometry structures

pub mod dimension;
pub mod coordinate;
pub mod winding;
pub mod varyings;
pub mod clipvertex;
pub mod screenvertex;
pub mod viewport;
pub mod clip;
pub mod line;

pub use self::dimension::{Dimensions, HasDimensions, Rect};
pub use self::coordinate::Coordinate;
pub use self::winding::FaceWinding;
pub use self::varyings::{Varyings, MAX_VARYINGS};
pub use self::clipvertex::ClipVertex;
pub use self::screenvertex::ScreenVertex;
pub use self::viewport::{Viewport, DepthRange};
pub use self::clip::{ClippingPlane, ALL_CLIPPING_PLANES};
