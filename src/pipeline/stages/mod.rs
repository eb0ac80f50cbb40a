pub mod input;
pub mod vertex;
pub mod clip;
pub mod assembly;
pub mod rasterization;
pub mod fragment;
pub mod output;

pub use self::vertex::VertexShader;
pub use self::fragment::{FragmentShader, FragmentOutput};
