//! Particle pools and the local fluid force model.
//!
//! Water and sand ride on the rigid body engine: each substance owns a
//! fixed-capacity pool of pre-allocated bodies that are toggled
//! active/inactive instead of created/destroyed. Water additionally gets
//! a per-step spatial hash and pressure/viscosity forces; sand relies on
//! its body material alone.

mod forces;
mod pool;
mod spatial_hash;

pub use forces::{apply_fluid_forces, FluidParams};
pub use pool::{ParticlePool, SENTINEL};
pub use spatial_hash::SpatialHash;

use crate::rigid_body::Vec2;
use crate::rigid_body_system::BodyHandle;

/// Read-only snapshot of one active particle, taken before the force
/// pass so force computation never aliases engine state.
#[derive(Clone, Copy, Debug)]
pub struct ParticleView {
    pub handle: BodyHandle,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}
