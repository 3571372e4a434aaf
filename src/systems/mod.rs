//! Simulation systems.

pub mod particles;
pub mod rigid_body;
pub mod rigid_body_system;
