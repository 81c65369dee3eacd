//! Pointer picking: pointer position → world ray → nearest registered object →
//! dispatch of that object's payload.
//!
//! The controller never touches the renderer directly. It borrows a camera
//! ([`Unproject`]) and an intersection backend ([`Intersect`]) for the duration
//! of each call, and hands the winning payload to a callback supplied at
//! construction.

use crate::camera::Unproject;
use crate::constants::DEFAULT_UNPROJECT_DEPTH;
use crate::error::{PickError, Result};
use crate::ray::Ray;
use crate::scene::ObjectId;
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};

/// One ray/object intersection reported by a backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub object: ObjectId,
    pub distance: f32,
}

/// Intersection primitive supplied by the rendering side.
pub trait Intersect {
    /// Every object in `objects` hit by `ray`, in any order.
    fn intersect(&self, ray: &Ray, objects: &[ObjectId]) -> Vec<RayHit>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickConfig {
    /// Clip depth paired with the pointer NDC before unprojection.
    pub depth_hint: f32,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            depth_hint: DEFAULT_UNPROJECT_DEPTH,
        }
    }
}

/// Winning hit of a pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub object: ObjectId,
    pub distance: f32,
}

pub type Dispatch<P> = Box<dyn FnMut(&P) -> anyhow::Result<()>>;

pub struct PickingController<P> {
    config: PickConfig,
    entries: Vec<(ObjectId, P)>,
    dispatch: Dispatch<P>,
}

impl<P> PickingController<P> {
    pub fn new(dispatch: impl FnMut(&P) -> anyhow::Result<()> + 'static) -> Self {
        Self::with_config(PickConfig::default(), dispatch)
    }

    pub fn with_config(
        config: PickConfig,
        dispatch: impl FnMut(&P) -> anyhow::Result<()> + 'static,
    ) -> Self {
        Self {
            config,
            entries: Vec::new(),
            dispatch: Box::new(dispatch),
        }
    }

    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// Register `object` with `payload`. A handle is only ever stored once:
    /// registering it again swaps the payload in place (keeping its original
    /// tie-break position) and returns the old one.
    pub fn register_pickable(&mut self, object: ObjectId, payload: P) -> Option<P> {
        match self.slot_of(object) {
            Some(slot) => {
                log::warn!("[pick] {:?} already registered; replacing payload", object);
                Some(std::mem::replace(&mut self.entries[slot].1, payload))
            }
            None => {
                self.entries.push((object, payload));
                None
            }
        }
    }

    pub fn unregister_pickable(&mut self, object: ObjectId) -> Option<P> {
        let slot = self.slot_of(object)?;
        Some(self.entries.remove(slot).1)
    }

    pub fn payload(&self, object: ObjectId) -> Option<&P> {
        self.entries
            .iter()
            .find(|(id, _)| *id == object)
            .map(|(_, p)| p)
    }

    /// Registered handles in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// World ray under a pointer position given in viewport pixels.
    pub fn pointer_ray(
        &self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &impl Unproject,
    ) -> Result<Ray> {
        if !viewport.is_valid() {
            return Err(PickError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !pointer.is_finite() {
            return Err(PickError::InvalidPointer {
                x: pointer.x,
                y: pointer.y,
            });
        }
        let ndc = viewport.to_ndc(pointer);
        let origin = camera.position();
        let point = camera.unproject(Vec3::new(ndc.x, ndc.y, self.config.depth_hint));
        let ray = Ray::through(origin, point).ok_or(PickError::DegenerateRay { origin, point })?;
        log::debug!(
            "[pick] ndc=({:.3},{:.3}) origin={} dir={}",
            ndc.x,
            ndc.y,
            ray.origin(),
            ray.direction()
        );
        Ok(ray)
    }

    /// Nearest registered object under the pointer, without dispatching.
    pub fn pick(
        &self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &impl Unproject,
        backend: &impl Intersect,
    ) -> Result<Option<PickHit>> {
        Ok(self
            .nearest(pointer, viewport, camera, backend)?
            .map(|(slot, distance)| PickHit {
                object: self.entries[slot].0,
                distance,
            }))
    }

    /// Pick under the pointer and dispatch the winner's payload. A miss is
    /// `Ok(None)` and dispatches nothing.
    pub fn handle_pointer_down(
        &mut self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &impl Unproject,
        backend: &impl Intersect,
    ) -> Result<Option<PickHit>> {
        let Some((slot, distance)) = self.nearest(pointer, viewport, camera, backend)? else {
            return Ok(None);
        };
        let (object, payload) = &self.entries[slot];
        (self.dispatch)(payload).map_err(PickError::Dispatch)?;
        Ok(Some(PickHit {
            object: *object,
            distance,
        }))
    }

    fn slot_of(&self, object: ObjectId) -> Option<usize> {
        self.entries.iter().position(|(id, _)| *id == object)
    }

    // Returns (registry slot, distance). Ties go to the lower slot.
    fn nearest(
        &self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &impl Unproject,
        backend: &impl Intersect,
    ) -> Result<Option<(usize, f32)>> {
        let ray = self.pointer_ray(pointer, viewport, camera)?;
        let handles: Vec<ObjectId> = self.objects().collect();
        let hits = backend.intersect(&ray, &handles);
        log::debug!("[pick] {} hit(s)", hits.len());

        let mut best = None::<(usize, f32)>;
        for hit in hits {
            let Some(slot) = self.slot_of(hit.object) else {
                log::warn!("[pick] backend reported unregistered {:?}", hit.object);
                continue;
            };
            if hit.distance.is_nan() {
                continue;
            }
            match best {
                Some((bs, bd)) if hit.distance > bd || (hit.distance == bd && slot > bs) => {}
                _ => best = Some((slot, hit.distance)),
            }
        }
        Ok(best)
    }
}
