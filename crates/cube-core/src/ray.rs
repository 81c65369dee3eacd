use glam::{Mat4, Vec3};

/// World-space ray. The direction is always unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Ray from `origin` through `point`. `None` if either point is not finite
    /// or the two coincide.
    pub fn through(origin: Vec3, point: Vec3) -> Option<Self> {
        if !origin.is_finite() || !point.is_finite() {
            return None;
        }
        let direction = (point - origin).normalize_or_zero();
        if direction.length_squared() < 1e-12 {
            return None;
        }
        Some(Self { origin, direction })
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Origin and direction in another frame. The direction is left
    /// unnormalized so ray parameters keep their world-space meaning.
    #[inline]
    pub fn transformed(&self, m: &Mat4) -> (Vec3, Vec3) {
        (m.transform_point3(self.origin), m.transform_vector3(self.direction))
    }
}

/// Slab test against an axis-aligned box. Returns the entry parameter; rays
/// starting inside the box or pointing away from it report no hit.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_near > t_far || t_far < 0.0 {
        return None;
    }
    (t_near >= 0.0).then_some(t_near)
}
