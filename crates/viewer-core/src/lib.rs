pub mod asset;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod mesh;
pub mod quality;
pub mod session;
pub mod state;

pub use asset::*;
pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use mesh::*;
pub use quality::*;
pub use session::*;
pub use state::*;

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../shaders/model.wgsl");
