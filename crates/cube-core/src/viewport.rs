use glam::Vec2;

/// Drawable area in pixels. Pointer positions use a top-left origin with Y
/// growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Pixel position to normalized device coordinates in [-1, 1], Y up.
    #[inline]
    pub fn to_ndc(&self, px: Vec2) -> Vec2 {
        Vec2::new(
            (px.x / self.width) * 2.0 - 1.0,
            -(px.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Inverse of [`Viewport::to_ndc`].
    #[inline]
    pub fn to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}
