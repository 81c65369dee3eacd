//! Camera description and the unprojection seam used by picking.
//!
//! These types avoid platform-specific APIs so the picking path can be driven
//! from host tests as well as from the web frontend.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3};

/// Anything that can map a normalized device coordinate back into world space.
pub trait Unproject {
    /// Eye position in world space.
    fn position(&self) -> Vec3;
    /// Map `(ndc_x, ndc_y, depth)` to a world-space point.
    fn unproject(&self, ndc: Vec3) -> Vec3;
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis at `z`, looking at the origin.
    pub fn looking_at_origin(z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track the drawable size; an empty size leaves the aspect untouched.
    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Project a world-space point to `(ndc_x, ndc_y, depth)`.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at_origin(CAMERA_Z, 1.0)
    }
}

impl Unproject for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection().inverse().project_point3(ndc)
    }
}
