use wasm_bindgen::prelude::*;

use crate::domain::substance::Substance;
use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the given extents and pool capacities
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        water_capacity: usize,
        sand_capacity: usize,
    ) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height, water_capacity, sand_capacity)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Total bodies owned by the engine (pooled + debris)
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.core.is_paused()
    }

    /// Retune the fluid force model without reinitializing pools
    pub fn set_fluid_params(
        &mut self,
        stiffness: f32,
        viscosity: f32,
        repulsion: f32,
        interaction_radius: f32,
    ) {
        self.core
            .set_fluid_params(stiffness, viscosity, repulsion, interaction_radius);
    }

    // === PARTICLE API ===

    /// Spawn one particle. Returns false for unknown substance IDs or a
    /// disabled pool (ceiling 0).
    pub fn spawn_particle(&mut self, substance: u8, x: f32, y: f32, vx: f32, vy: f32) -> bool {
        let Some(substance) = Substance::from_id(substance) else {
            return false;
        };
        self.core
            .spawn_particle(substance, Vec2::new(x, y), Vec2::new(vx, vy))
    }

    /// Spawn particles in a disc (brush)
    pub fn spawn_particles_in_radius(&mut self, substance: u8, cx: f32, cy: f32, radius: f32) {
        if let Some(substance) = Substance::from_id(substance) {
            self.core
                .spawn_particles_in_radius(substance, Vec2::new(cx, cy), radius, Vec2::zero());
        }
    }

    /// Deactivate every particle of a substance
    pub fn clear_particles(&mut self, substance: u8) {
        if let Some(substance) = Substance::from_id(substance) {
            self.core.clear_particles(substance);
        }
    }

    /// Cap the number of simultaneously active particles of a substance
    pub fn set_active_ceiling(&mut self, substance: u8, ceiling: usize) {
        if let Some(substance) = Substance::from_id(substance) {
            self.core.set_active_ceiling(substance, ceiling);
        }
    }

    pub fn active_count(&self, substance: u8) -> u32 {
        match Substance::from_id(substance) {
            Some(substance) => self.core.active_count(substance) as u32,
            None => 0,
        }
    }

    pub fn pool_capacity(&self, substance: u8) -> u32 {
        match Substance::from_id(substance) {
            Some(substance) => self.core.pool_capacity(substance) as u32,
            None => 0,
        }
    }

    /// Interleaved [x, y, ...] of active particles, for canvas rendering
    pub fn particle_positions(&self, substance: u8) -> Vec<f32> {
        let Some(substance) = Substance::from_id(substance) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.core.active_count(substance) * 2);
        self.core.for_each_active_particle(substance, |pos, _vel| {
            out.push(pos.x);
            out.push(pos.y);
        });
        out
    }

    // === DEBRIS API ===

    /// Spawn an ordinary square rigid body
    pub fn spawn_debris(&mut self, x: f32, y: f32, half_extent: f32) -> bool {
        self.core.spawn_debris(Vec2::new(x, y), half_extent)
    }

    // === SNAPSHOT API ===

    pub fn save_particles(&self) -> Result<String, JsValue> {
        self.core
            .save_particles_json()
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_particles(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_particles_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    // === STEPPING ===

    /// Advance by `real_dt` seconds of wall time (fixed-step accumulator)
    pub fn update(&mut self, real_dt: f32) {
        self.core.update(real_dt);
    }

    /// Run exactly one fixed sub-step
    pub fn step(&mut self) {
        self.core.step();
    }
}
