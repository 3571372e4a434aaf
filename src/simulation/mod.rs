//! World - Pool-driven particle simulation on top of the rigid body engine
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: WorldCore only orchestrates, delegates to
//!   pools/forces/engine
//! - Open/Closed: new substances slot in without modifying the step loop
//!
//! Pool mechanics are in systems/particles, the force model is in
//! systems/particles/forces.rs, integration is in systems/rigid_body_system.

use crate::domain::substance::Substance;
use crate::particles::{FluidParams, ParticlePool, ParticleView, SpatialHash};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::RigidBodyEngine;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_stats::PerfTimer;

/// Fixed physics sub-step (seconds). Real time is accumulated and
/// consumed in whole steps.
pub const FIXED_STEP: f32 = 1.0 / 60.0;

/// Largest slice of real time one frame may feed the accumulator; spikes
/// beyond this are dropped instead of spiraling into catch-up steps.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Engine body budget reserved for ordinary (non-pooled) rigid bodies.
pub const DEBRIS_BUDGET: usize = 256;

/// The simulation world
pub struct WorldCore {
    engine: RigidBodyEngine,
    water: ParticlePool,
    sand: ParticlePool,
    grid: SpatialHash,
    fluid_params: FluidParams,

    /// Active-water snapshot reused every step
    scratch: Vec<ParticleView>,

    // Settings
    width: f32,
    height: f32,
    gravity: Vec2,
    paused: bool,

    // State
    accumulator: f32,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with the given extents (world units) and per-substance
    /// pool capacities. Fails when the engine cannot allocate the pools.
    pub fn new(
        width: f32,
        height: f32,
        water_capacity: usize,
        sand_capacity: usize,
    ) -> Result<Self, String> {
        init::create_world_core(width, height, water_capacity, sand_capacity)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    /// Total bodies owned by the engine (pooled + debris)
    pub fn body_count(&self) -> usize {
        self.engine.body_count()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Pause gates the whole tick pipeline; it is checked before a frame
    /// runs, never mid-step.
    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool {
        settings::is_paused(self)
    }

    /// Retune the fluid force model without touching the pools
    pub fn set_fluid_params(
        &mut self,
        stiffness: f32,
        viscosity: f32,
        repulsion: f32,
        interaction_radius: f32,
    ) {
        settings::set_fluid_params(self, stiffness, viscosity, repulsion, interaction_radius);
    }

    pub fn fluid_params(&self) -> FluidParams {
        self.fluid_params
    }

    /// Cap the number of simultaneously active particles for a substance
    pub fn set_active_ceiling(&mut self, substance: Substance, ceiling: usize) {
        settings::set_active_ceiling(self, substance, ceiling);
    }

    pub fn active_ceiling(&self, substance: Substance) -> usize {
        self.pool(substance).active_ceiling()
    }

    pub fn pool_capacity(&self, substance: Substance) -> usize {
        self.pool(substance).capacity()
    }

    /// Spawn (recycle) one particle. Returns false when the pool is
    /// disabled (ceiling 0).
    pub fn spawn_particle(&mut self, substance: Substance, position: Vec2, velocity: Vec2) -> bool {
        commands::spawn_particle(self, substance, position, velocity)
    }

    /// Spawn particles in a disc (brush)
    pub fn spawn_particles_in_radius(
        &mut self,
        substance: Substance,
        center: Vec2,
        radius: f32,
        velocity: Vec2,
    ) {
        commands::spawn_particles_in_radius(self, substance, center, radius, velocity)
    }

    /// Deactivate every particle of a substance
    pub fn clear_particles(&mut self, substance: Substance) {
        commands::clear_particles(self, substance)
    }

    pub fn active_count(&self, substance: Substance) -> usize {
        self.pool(substance).active_count(&self.engine)
    }

    // === DEBRIS API ===

    /// Spawn an ordinary square rigid body (crate, plank). Returns false
    /// when the debris budget is exhausted.
    pub fn spawn_debris(&mut self, position: Vec2, half_extent: f32) -> bool {
        commands::spawn_debris(self, position, half_extent)
    }

    // === SNAPSHOT API ===

    /// Visit each active particle's (position, velocity) for write-out
    pub fn for_each_active_particle<F: FnMut(Vec2, Vec2)>(&self, substance: Substance, f: F) {
        snapshot::for_each_active_particle(self, substance, f)
    }

    /// Serialize all active particles to a JSON bundle
    pub fn save_particles_json(&self) -> Result<String, String> {
        snapshot::save_particles_json(self)
    }

    /// Clear both pools and respawn from a JSON bundle
    pub fn load_particles_json(&mut self, json: &str) -> Result<(), String> {
        snapshot::load_particles_json(self, json)
    }

    // === STEPPING ===

    /// Advance by `real_dt` seconds of wall time, running as many fixed
    /// sub-steps as the accumulator covers. No-op while paused.
    pub fn update(&mut self, real_dt: f32) {
        step::update(self, real_dt);
    }

    /// Run exactly one fixed sub-step:
    /// grid rebuild -> force pass -> engine integration
    pub fn step(&mut self) {
        step::step(self);
    }

    fn pool(&self, substance: Substance) -> &ParticlePool {
        match substance {
            Substance::Water => &self.water,
            Substance::Sand => &self.sand,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
