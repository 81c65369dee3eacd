// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use cube_core::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_Z, CUBE_SIZE, CUBE_SPIN_PER_FRAME,
    DEFAULT_CUBE_URL, DEFAULT_UNPROJECT_DEPTH,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_within_reasonable_bounds() {
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_starts_outside_the_cube_and_inside_the_frustum() {
    let half = CUBE_SIZE * 0.5;
    assert!(CAMERA_Z - half > CAMERA_NEAR);
    assert!(CAMERA_Z + half < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_hint_is_mid_range() {
    assert!(DEFAULT_UNPROJECT_DEPTH > 0.0 && DEFAULT_UNPROJECT_DEPTH < 1.0);
    assert_eq!(DEFAULT_UNPROJECT_DEPTH, 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_is_small_per_frame() {
    assert!(CUBE_SPIN_PER_FRAME > 0.0);
    assert!(CUBE_SPIN_PER_FRAME < std::f32::consts::FRAC_PI_4);
}

#[test]
fn frontend_strings_are_set() {
    assert!(!CANVAS_ID.is_empty());
    assert_eq!(LINK_TARGET, "_blank");
    assert_ne!(CURSOR_HOVER, CURSOR_IDLE);
    assert!(DEFAULT_CUBE_URL.starts_with("https://"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clear_color_is_opaque_and_normalized() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_COLOR[3], 1.0);
    assert!(INITIAL_INSTANCE_CAPACITY >= 1);
}
