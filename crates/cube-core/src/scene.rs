//! Minimal scene: an arena of boxes addressed by index-based handles.
//!
//! `Scene` is also the default intersection backend for picking. Boxes are
//! tested in their current pose, so a spinning cube is picked exactly as it is
//! drawn.

use crate::picking::{Intersect, RayHit};
use crate::ray::{ray_aabb, Ray};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Stable handle to an object in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.translation,
        )
    }
}

/// A solid box with a flat colour.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxObject {
    pub transform: Transform,
    pub half_extents: Vec3,
    pub color: [f32; 3],
}

impl BoxObject {
    /// Cube with edge length `size` centred at the origin.
    pub fn cube(size: f32, color: [f32; 3]) -> Self {
        Self {
            transform: Transform::default(),
            half_extents: Vec3::splat(size * 0.5),
            color,
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    /// Maps the unit box `[-0.5, 0.5]^3` to this object's world pose.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.matrix() * Mat4::from_scale(self.half_extents * 2.0)
    }

    /// Distance along `ray` to the first surface hit, if any.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let world = self.world_matrix();
        if world.determinant().abs() < 1e-12 {
            return None;
        }
        let (o, d) = ray.transformed(&world.inverse());
        ray_aabb(o, d, Vec3::splat(-0.5), Vec3::splat(0.5))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<BoxObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_box(&mut self, object: BoxObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&BoxObject> {
        self.objects.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut BoxObject> {
        self.objects.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &BoxObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i as u32), o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Intersect for Scene {
    fn intersect(&self, ray: &Ray, objects: &[ObjectId]) -> Vec<RayHit> {
        objects
            .iter()
            .filter_map(|&id| {
                let distance = self.get(id)?.intersect_ray(ray)?;
                Some(RayHit {
                    object: id,
                    distance,
                })
            })
            .collect()
    }
}
