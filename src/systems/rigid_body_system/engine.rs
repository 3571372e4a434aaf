use crate::domain::substance::BodyTag;
use crate::rigid_body::{Material, RigidBody, Shape, Vec2};

use super::bounds::resolve_world_bounds;

/// Opaque handle to a body owned by the engine.
///
/// Bodies are never destroyed, only toggled active/inactive, so a handle
/// stays valid for the lifetime of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyHandle(pub(crate) u32);

/// Manages all rigid bodies in the simulation
pub struct RigidBodyEngine {
    bodies: Vec<RigidBody>,
    /// Side table: what each body is, for rendering/collision filtering
    tags: Vec<BodyTag>,
    max_bodies: usize,
    width: f32,
    height: f32,
    next_id: u32,
}

impl RigidBodyEngine {
    /// Create an engine for a world of `width` x `height` world units,
    /// with a hard body budget.
    pub fn new(width: f32, height: f32, max_bodies: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(max_bodies),
            tags: Vec::with_capacity(max_bodies),
            max_bodies,
            width,
            height,
            next_id: 1,
        }
    }

    /// Allocate a new body.
    ///
    /// Fails when the body budget is exhausted. Pool initialization treats
    /// this as fatal and propagates it up.
    pub fn create_body(
        &mut self,
        pos: Vec2,
        shape: Shape,
        material: Material,
        tag: BodyTag,
    ) -> Result<BodyHandle, String> {
        if self.bodies.len() >= self.max_bodies {
            return Err(format!(
                "rigid body budget exhausted ({} bodies)",
                self.max_bodies
            ));
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(RigidBody::new(pos, shape, material, id));
        self.tags.push(tag);
        Ok(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn active_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.active).count()
    }

    pub fn set_active(&mut self, handle: BodyHandle, active: bool) {
        self.bodies[handle.0 as usize].active = active;
    }

    pub fn is_active(&self, handle: BodyHandle) -> bool {
        self.bodies[handle.0 as usize].active
    }

    pub fn set_position(&mut self, handle: BodyHandle, pos: Vec2) {
        self.bodies[handle.0 as usize].pos = pos;
    }

    pub fn position(&self, handle: BodyHandle) -> Vec2 {
        self.bodies[handle.0 as usize].pos
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        self.bodies[handle.0 as usize].velocity = velocity;
    }

    pub fn velocity(&self, handle: BodyHandle) -> Vec2 {
        self.bodies[handle.0 as usize].velocity
    }

    /// Accumulate a force at the body's center of mass for this step
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        self.bodies[handle.0 as usize].apply_force(force);
    }

    /// Force accumulated so far this step (cleared by `step`)
    pub fn accumulated_force(&self, handle: BodyHandle) -> Vec2 {
        self.bodies[handle.0 as usize].force
    }

    pub fn tag(&self, handle: BodyHandle) -> BodyTag {
        self.tags[handle.0 as usize]
    }

    pub fn mass_of(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle.0 as usize].mass
    }

    /// Integrate one fixed step.
    ///
    /// Inactive bodies are skipped entirely; their parked state must not
    /// drift. Force accumulators are cleared for every body afterwards so
    /// nothing carries across steps.
    pub fn step(&mut self, dt: f32, gravity: Vec2) {
        for body in self.bodies.iter_mut() {
            if !body.active {
                continue;
            }

            let accel = gravity + body.force * (1.0 / body.mass);
            body.velocity = body.velocity + accel * dt;
            body.pos = body.pos + body.velocity * dt;

            resolve_world_bounds(body, self.width, self.height);
        }

        for body in self.bodies.iter_mut() {
            body.force = Vec2::zero();
        }
    }
}
