//! Substance catalog for pooled particles.
//!
//! Water and sand are the only pooled substances. Everything the pool
//! needs to pre-build a particle body (shape, material, tag) hangs off
//! `Substance` so the pool itself stays substance-agnostic.

use crate::rigid_body::{Material, Shape};

/// Substance IDs exposed over the WASM boundary.
pub const SUB_WATER: u8 = 0;
pub const SUB_SAND: u8 = 1;

/// Radius of a water particle body (world units)
pub const WATER_RADIUS: f32 = 0.15;
/// Half extent of a sand grain body (world units)
pub const SAND_HALF_EXTENT: f32 = 0.12;

/// A pooled particle substance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Substance {
    Water,
    Sand,
}

/// Tag stored in the engine's side table next to each body.
///
/// Rendering and collision filtering switch on this instead of probing
/// body payloads for optional fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyTag {
    Water,
    Sand,
    /// Ordinary user-spawned rigid body (crates, planks, ...)
    Debris,
}

impl Substance {
    /// Decode a substance ID coming from JS. Unknown IDs are rejected.
    pub fn from_id(id: u8) -> Option<Substance> {
        match id {
            SUB_WATER => Some(Substance::Water),
            SUB_SAND => Some(Substance::Sand),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Substance::Water => SUB_WATER,
            Substance::Sand => SUB_SAND,
        }
    }

    /// Fixed collision shape for this substance's particle bodies
    pub fn shape(&self) -> Shape {
        match self {
            Substance::Water => Shape::Circle { radius: WATER_RADIUS },
            Substance::Sand => Shape::Square { half_extent: SAND_HALF_EXTENT },
        }
    }

    /// Fixed material parameters for this substance's particle bodies
    pub fn material(&self) -> Material {
        match self {
            // Water slides freely; cohesion comes from the force model.
            Substance::Water => Material {
                density: 1.0,
                friction: 0.0,
                restitution: 0.1,
            },
            // Sand piles up: high friction, almost no bounce.
            Substance::Sand => Material {
                density: 1.8,
                friction: 0.6,
                restitution: 0.05,
            },
        }
    }

    pub fn tag(&self) -> BodyTag {
        match self {
            Substance::Water => BodyTag::Water,
            Substance::Sand => BodyTag::Sand,
        }
    }
}
