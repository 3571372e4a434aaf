use super::vec2::Vec2;

use std::f32::consts::PI;

/// Collision shape of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Square { half_extent: f32 },
}

impl Shape {
    /// Half size of the bounding box, used for world-bounds contact
    pub fn half_size(&self) -> f32 {
        match self {
            Shape::Circle { radius } => *radius,
            Shape::Square { half_extent } => *half_extent,
        }
    }

    /// Area in world units squared
    pub fn area(&self) -> f32 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Square { half_extent } => 4.0 * half_extent * half_extent,
        }
    }
}

/// Material parameters fixed at body creation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (world units per second)
    pub velocity: Vec2,
    /// Force accumulated this step, cleared after integration
    pub force: Vec2,
    /// Is body active (simulated)?
    pub active: bool,
    /// Unique ID for this body
    pub id: u32,

    // === Shape / Material ===
    pub shape: Shape,
    pub material: Material,
    /// Total mass (density * area), never zero
    pub mass: f32,
}

impl RigidBody {
    pub fn new(pos: Vec2, shape: Shape, material: Material, id: u32) -> Self {
        // Floor the mass so force/mass stays finite for tiny shapes.
        let mass = (material.density * shape.area()).max(1e-6);

        Self {
            pos,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            active: true,
            id,
            shape,
            material,
            mass,
        }
    }

    /// Accumulate a force at the center of mass for this step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force = self.force + force;
    }

    /// Apply an instantaneous impulse at the center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity = self.velocity + impulse * (1.0 / self.mass);
    }
}
