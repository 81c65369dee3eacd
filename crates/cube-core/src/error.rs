//! Error types for the picking path.

use glam::Vec3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickError {
    /// The viewport has no usable area to normalize against.
    #[error("viewport must have a positive, finite size (got {width}x{height})")]
    InvalidViewport { width: f32, height: f32 },

    #[error("pointer position ({x}, {y}) is not finite")]
    InvalidPointer { x: f32, y: f32 },

    /// Unprojection produced a point that cannot define a ray from the eye.
    #[error("camera unprojection gave no usable ray from {origin} through {point}")]
    DegenerateRay { origin: Vec3, point: Vec3 },

    /// The dispatch collaborator rejected the payload.
    #[error("dispatch failed: {0:#}")]
    Dispatch(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PickError>;
