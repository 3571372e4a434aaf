//! Domain definitions shared across systems.

pub mod substance;
