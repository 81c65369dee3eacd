pub mod camera;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod picking;
pub mod ray;
pub mod scene;
pub mod viewport;
pub static CUBE_WGSL: &str = include_str!("../shaders/cube.wgsl");

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use picking::*;
pub use ray::*;
pub use scene::*;
pub use viewport::*;
