//! Fixed-capacity particle pool with round-robin recycling.
//!
//! All bodies for a substance are allocated once at startup. "Spawning"
//! activates the next slot in ring order, "deleting" deactivates. The
//! pool therefore never allocates after construction and spawn/recycle
//! are O(1).

use crate::domain::substance::Substance;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{BodyHandle, RigidBodyEngine};

use super::ParticleView;

/// Parking spot for inactive particles, far outside any playable world
/// so a spuriously woken body cannot touch active geometry.
pub const SENTINEL: Vec2 = Vec2 { x: -10_000.0, y: -10_000.0 };

/// Pool of pre-allocated particle bodies for one substance
pub struct ParticlePool {
    substance: Substance,
    slots: Vec<BodyHandle>,
    /// Round-robin cursor, always < active_ceiling when the ceiling is > 0
    next_index: usize,
    /// Runtime cap on simultaneously active particles, <= capacity
    active_ceiling: usize,
}

impl ParticlePool {
    /// Pre-create `capacity` engine bodies, parked and inactive.
    ///
    /// Fails fatally if the engine's body budget cannot cover the pool;
    /// the caller aborts startup rather than running with a partial pool.
    pub fn new(
        engine: &mut RigidBodyEngine,
        substance: Substance,
        capacity: usize,
    ) -> Result<Self, String> {
        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            let handle =
                engine.create_body(SENTINEL, substance.shape(), substance.material(), substance.tag())?;
            engine.set_active(handle, false);
            slots.push(handle);
        }

        Ok(Self {
            substance,
            slots,
            next_index: 0,
            active_ceiling: capacity,
        })
    }

    pub fn substance(&self) -> Substance {
        self.substance
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_ceiling(&self) -> usize {
        self.active_ceiling
    }

    /// Activate the slot under the cursor, overwriting whatever was there.
    ///
    /// Recycling a still-active slot is by design, not a failure. Returns
    /// `false` only when the pool is disabled (ceiling 0).
    pub fn spawn(&mut self, engine: &mut RigidBodyEngine, position: Vec2, velocity: Vec2) -> bool {
        if self.active_ceiling == 0 {
            return false;
        }

        let handle = self.slots[self.next_index];
        engine.set_position(handle, position);
        engine.set_velocity(handle, velocity);
        engine.set_active(handle, true);

        self.next_index = (self.next_index + 1) % self.active_ceiling;
        true
    }

    /// Park every slot: inactive, at the sentinel, zero velocity.
    pub fn deactivate_all(&mut self, engine: &mut RigidBodyEngine) {
        for &handle in &self.slots {
            park(engine, handle);
        }
        self.next_index = 0;
    }

    /// Clamp and apply a new active ceiling.
    ///
    /// Safe to call every frame with the same value: the fast path does
    /// no per-slot work. Lowering the ceiling parks every active slot at
    /// or above it.
    pub fn set_active_ceiling(&mut self, engine: &mut RigidBodyEngine, ceiling: usize) {
        let ceiling = ceiling.min(self.slots.len());
        if ceiling == self.active_ceiling {
            return;
        }

        for &handle in &self.slots[ceiling..] {
            if engine.is_active(handle) {
                park(engine, handle);
            }
        }

        self.active_ceiling = ceiling;
        if self.next_index >= ceiling {
            self.next_index = 0;
        }
    }

    /// Visit each active particle's (position, velocity), in slot order.
    ///
    /// This is the read half of the snapshot surface; the serializer
    /// replays the captured pairs through `spawn` to restore state.
    pub fn for_each_active<F: FnMut(Vec2, Vec2)>(&self, engine: &RigidBodyEngine, mut f: F) {
        for &handle in &self.slots {
            if engine.is_active(handle) {
                f(engine.position(handle), engine.velocity(handle));
            }
        }
    }

    /// Copy all active particles into `out` for the force pass.
    pub fn collect_active(&self, engine: &RigidBodyEngine, out: &mut Vec<ParticleView>) {
        out.clear();
        for &handle in &self.slots {
            if engine.is_active(handle) {
                out.push(ParticleView {
                    handle,
                    position: engine.position(handle),
                    velocity: engine.velocity(handle),
                    mass: engine.mass_of(handle),
                });
            }
        }
    }

    pub fn active_count(&self, engine: &RigidBodyEngine) -> usize {
        self.slots.iter().filter(|&&h| engine.is_active(h)).count()
    }

    /// Handle of a slot by index (used by tests and debug tooling)
    pub fn slot_handle(&self, index: usize) -> BodyHandle {
        self.slots[index]
    }
}

fn park(engine: &mut RigidBodyEngine, handle: BodyHandle) {
    engine.set_active(handle, false);
    engine.set_position(handle, SENTINEL);
    engine.set_velocity(handle, Vec2::zero());
}
