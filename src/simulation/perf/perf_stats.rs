//! Opt-in perf metrics for the step pipeline.
//!
//! One `PerfStats` snapshot per step, timing the three phases (grid
//! rebuild, force pass, engine integration) plus the whole step.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) engine_ms: f64,
    pub(super) water_active: u32,
    pub(super) sand_active: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn engine_ms(&self) -> f64 { self.engine_ms }
    #[wasm_bindgen(getter)]
    pub fn water_active(&self) -> u32 { self.water_active }
    #[wasm_bindgen(getter)]
    pub fn sand_active(&self) -> u32 { self.sand_active }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}

/// Phase timer backing the stats above.
///
/// `std::time::Instant` does not exist on wasm32, so the wasm build
/// reads the JS date clock instead. Sub-millisecond drift between the
/// two clocks is irrelevant at per-phase granularity.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn clock_ms() -> f64 {
    js_sys::Date::now()
}

impl PerfTimer {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn start() -> Self {
        PerfTimer { started_at_ms: clock_ms() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn start() -> Self {
        PerfTimer { started_at: std::time::Instant::now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        clock_ms() - self.started_at_ms
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }
}
