pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod dither;
pub mod geometry;
pub mod i18n;
pub mod noise;
pub mod particles;
pub mod shading;
pub mod uniforms;

pub use animation::{FrameDriver, FrameOutput};
pub use camera::{CameraUniforms, OrbitCamera};
pub use config::SceneConfig;
pub use constants::*;
pub use geometry::{BackdropVertex, Mesh, Vertex};
pub use i18n::{Language, Translator};
pub use uniforms::DitherUniforms;

// Shaders bundled as string constants
pub static DITHER_WGSL: &str = include_str!("../../shaders/dither.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
