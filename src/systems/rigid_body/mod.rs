//! Rigid body primitives: 2D vectors, shapes, materials, body state.

mod body;
mod vec2;

pub use body::{Material, RigidBody, Shape};
pub use vec2::Vec2;
