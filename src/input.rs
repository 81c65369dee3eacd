use cube_core::Viewport;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Pointer position in the canvas' backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_backing_px(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset into backing-store pixels. An empty CSS box maps
/// everything to the backing-store centre.
#[inline]
pub fn css_to_backing_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * backing_size
    } else {
        backing_size * 0.5
    }
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    viewport_for_size(canvas.width(), canvas.height())
}

#[inline]
pub fn viewport_for_size(width: u32, height: u32) -> Viewport {
    Viewport::new(width as f32, height as f32)
}
