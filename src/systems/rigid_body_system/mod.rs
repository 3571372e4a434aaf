//! RigidBodyEngine - Minimal dynamic rigid bodies for the WASM sandbox
//!
//! This is intentionally simple (no SAT / no impulse solver).
//! Goals:
//! - Give the particle pools a fixed budget of pre-allocatable bodies.
//! - Keep integration stable and deterministic.
//! - Accept external forces at the center of mass (the fluid model's
//!   only entry point into the solver).
//!
//! Current behavior:
//! - Semi-implicit Euler: forces and gravity into velocity, then position.
//! - Per-axis collision against the world bounds with restitution.
//! - No rotation physics (particles are symmetric, debris tolerates it).

mod bounds;
mod engine;

pub use engine::{BodyHandle, RigidBodyEngine};
