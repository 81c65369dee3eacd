use glam::Vec3;

// Shared scene/picking constants used by the web frontend.

// Picking
/// Depth paired with pointer NDC before unprojection, in the camera's [0, 1]
/// clip depth range. Changing it moves the world depth plane that pointer
/// coordinates map onto; a perspective camera's ray direction is unaffected.
pub const DEFAULT_UNPROJECT_DEPTH: f32 = 0.5;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0; // keeps the eye outside the cube at the origin

// Cube
pub const CUBE_SIZE: f32 = 1.0; // edge length
pub const CUBE_COLOR: [f32; 3] = [0.0, 1.0, 0.0]; // green
pub const CUBE_SPIN_PER_FRAME: f32 = 0.01; // radians about X and Y each frame
pub const DEFAULT_CUBE_URL: &str = "https://stackoverflow.com/";

#[inline]
pub fn cube_half_extents() -> Vec3 {
    Vec3::splat(CUBE_SIZE * 0.5)
}
