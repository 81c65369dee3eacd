// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_offsets_scale_to_backing_store() {
    // 2x devicePixelRatio: CSS 400x300 box backed by 800x600 pixels
    let px = css_to_backing_px(
        Vec2::new(100.0, 150.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert!((px - Vec2::new(200.0, 300.0)).length() < 1e-4);
}

#[test]
fn css_corners_land_on_backing_corners() {
    let css_size = Vec2::new(640.0, 480.0);
    let backing = Vec2::new(1280.0, 960.0);
    assert_eq!(css_to_backing_px(Vec2::ZERO, css_size, backing), Vec2::ZERO);
    let br = css_to_backing_px(css_size, css_size, backing);
    assert!((br - backing).length() < 1e-3);
}

#[test]
fn empty_css_box_maps_to_center() {
    let backing = Vec2::new(800.0, 600.0);
    let px = css_to_backing_px(Vec2::new(10.0, 10.0), Vec2::ZERO, backing);
    assert_eq!(px, Vec2::new(400.0, 300.0));
}

#[test]
fn canvas_center_is_ndc_origin() {
    let viewport = viewport_for_size(1024, 768);
    let center = css_to_backing_px(
        Vec2::new(256.0, 192.0),
        Vec2::new(512.0, 384.0),
        Vec2::new(1024.0, 768.0),
    );
    let ndc = viewport.to_ndc(center);
    assert!(ndc.length() < 1e-6, "got {ndc}");
}

#[test]
fn viewport_for_size_keeps_dimensions() {
    let viewport = viewport_for_size(1920, 1080);
    assert_eq!(viewport.width, 1920.0);
    assert_eq!(viewport.height, 1080.0);
    assert!(viewport.is_valid());
    assert!(!viewport_for_size(0, 1080).is_valid());
}
