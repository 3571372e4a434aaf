//! Local pressure/viscosity force model for water.
//!
//! Not an SPH solver: a cheap per-particle approximation over the 3x3
//! spatial hash neighborhood, with a hard magnitude clamp to stay stable
//! inside a real-time frame budget. Forces go into the engine's per-step
//! accumulators and are integrated over the fixed step.

use crate::rigid_body::Vec2;
use crate::rigid_body_system::RigidBodyEngine;

use super::spatial_hash::SpatialHash;
use super::ParticleView;

/// Distances below this are excluded from direction normalization.
const DIST_EPSILON: f32 = 1e-4;

/// Tunable fluid force parameters, adjustable at runtime without
/// reinitializing the pools.
#[derive(Clone, Copy, Debug)]
pub struct FluidParams {
    /// Pressure stiffness: pressure = stiffness * local density
    pub stiffness: f32,
    /// Pulls a particle's velocity toward the local mean
    pub viscosity: f32,
    /// Short-range anti-clumping push
    pub repulsion: f32,
    /// Interaction radius; also the spatial hash cell size
    pub interaction_radius: f32,
    /// Hard cap on one particle's net force magnitude per step
    pub max_force: f32,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            stiffness: 60.0,
            viscosity: 8.0,
            repulsion: 2.0,
            interaction_radius: 0.5,
            max_force: 500.0,
        }
    }
}

/// One in-range neighbor of the particle being processed
struct NearEntry {
    index: usize,
    influence: f32,
    dist: f32,
    /// Offset from neighbor to particle
    delta: Vec2,
}

/// Compute and inject fluid forces for every particle in the snapshot.
///
/// `particles` must hold only active particles and `grid` must have been
/// rebuilt from the same slice this step.
pub fn apply_fluid_forces(
    engine: &mut RigidBodyEngine,
    params: &FluidParams,
    particles: &[ParticleView],
    grid: &SpatialHash,
) {
    let radius = params.interaction_radius;
    let radius_sq = radius * radius;
    let max_force_sq = params.max_force * params.max_force;

    // Scratch reused across particles; no force state survives the call.
    let mut near: Vec<NearEntry> = Vec::new();

    for (index, particle) in particles.iter().enumerate() {
        near.clear();
        let mut density = 0.0f32;
        let mut velocity_sum = Vec2::zero();

        // Linear falloff kernel: 1 at zero distance, 0 at the radius.
        grid.for_each_candidate(particle.position, |other| {
            if other == index {
                return;
            }
            let neighbor = &particles[other];
            let delta = particle.position - neighbor.position;
            let dist_sq = delta.length_squared();
            if dist_sq >= radius_sq {
                return;
            }

            let dist = dist_sq.sqrt();
            let influence = 1.0 - dist / radius;
            density += influence * influence;
            velocity_sum = velocity_sum + neighbor.velocity;
            near.push(NearEntry { index: other, influence, dist, delta });
        });

        // Zero neighbors -> zero force this step.
        if near.is_empty() {
            continue;
        }

        // Viscosity: damp motion relative to the local mean velocity.
        let average_velocity = velocity_sum * (1.0 / near.len() as f32);
        let mut force = (average_velocity - particle.velocity) * params.viscosity;

        // Pressure + short-range repulsion, both pushing away from the
        // neighbor. The neighbor-mass denominator is the shipped formula;
        // see DESIGN.md before "fixing" it.
        let pressure = params.stiffness * density;
        for entry in &near {
            if entry.dist < DIST_EPSILON {
                continue;
            }
            let direction = entry.delta * (1.0 / entry.dist);
            let neighbor_mass = particles[entry.index].mass;
            let magnitude = pressure * entry.influence * entry.influence / neighbor_mass
                + params.repulsion * entry.influence / neighbor_mass;
            force = force + direction * magnitude;
        }

        // Clamp to exactly max_force; degenerate near-coincident stacks
        // otherwise blow up the solver.
        let force_sq = force.length_squared();
        if force_sq > max_force_sq {
            force = force * (params.max_force / force_sq.sqrt());
        }

        engine.apply_force(particle.handle, force);
    }
}
