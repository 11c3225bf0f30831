pub mod camera;
pub mod constants;
pub mod cues;
pub mod curtain;
pub mod interp;
pub mod latch;
pub mod models;
pub mod oscillators;
pub mod params;
pub mod particles;
pub mod scene;
pub mod stage;
pub mod texture;
pub mod transport;

pub use camera::*;
pub use constants::*;
pub use cues::*;
pub use latch::*;
pub use params::*;
pub use particles::*;
pub use scene::*;
pub use stage::*;
pub use transport::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
