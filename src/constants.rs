/// Front-end wiring constants.
///
/// Scene and picking values live in `cube_core::constants`; these cover the
/// DOM and presentation side only.
// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const LINK_TARGET: &str = "_blank"; // new browsing context for picked links

// Pointer feedback
pub const CURSOR_HOVER: &str = "pointer";
pub const CURSOR_IDLE: &str = "default";

// Presentation
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const INITIAL_INSTANCE_CAPACITY: usize = 4; // grows on demand
