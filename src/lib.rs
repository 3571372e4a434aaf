//! Granula Engine - Particle pools and local fluid forces in WASM
//!
//! The sandbox treats water and sand as ordinary rigid bodies that are
//! pooled, reused and pushed around by a cheap local force model instead
//! of a full SPH solver.
//!
//! Architecture:
//! - domain/     - Substance definitions (water, sand)
//! - systems/    - Rigid bodies, particle pools, spatial hash, forces
//! - simulation/ - Orchestration + public API

pub mod domain;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps existing internal/external paths working)
pub use domain::substance;
pub use systems::particles;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Granula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::substance::Substance;
pub use simulation::{PerfStats, World, WorldCore};

// Export substance constants for JS
#[wasm_bindgen]
pub fn sub_water() -> u8 { domain::substance::SUB_WATER }
#[wasm_bindgen]
pub fn sub_sand() -> u8 { domain::substance::SUB_SAND }
