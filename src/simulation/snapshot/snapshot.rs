//! JSON snapshot of pooled particle state.
//!
//! Only (position, velocity) pairs cross this boundary; pool cursors and
//! engine micro-state (sleep flags etc.) are re-derived on load. Replaying
//! a captured bundle through `spawn` reproduces equivalent simulation
//! state, exact on the float values given identical spawn order.

use serde::{Deserialize, Serialize};

use crate::domain::substance::Substance;
use crate::rigid_body::Vec2;

use super::WorldCore;

#[derive(Serialize, Deserialize)]
struct ParticleRecord {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

#[derive(Serialize, Deserialize, Default)]
struct ParticleBundle {
    water: Vec<ParticleRecord>,
    sand: Vec<ParticleRecord>,
}

pub(super) fn for_each_active_particle<F: FnMut(Vec2, Vec2)>(
    world: &WorldCore,
    substance: Substance,
    f: F,
) {
    world.pool(substance).for_each_active(&world.engine, f)
}

pub(super) fn save_particles_json(world: &WorldCore) -> Result<String, String> {
    let mut bundle = ParticleBundle::default();

    for_each_active_particle(world, Substance::Water, |pos, vel| {
        bundle.water.push(record(pos, vel));
    });
    for_each_active_particle(world, Substance::Sand, |pos, vel| {
        bundle.sand.push(record(pos, vel));
    });

    serde_json::to_string(&bundle).map_err(|e| e.to_string())
}

pub(super) fn load_particles_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let bundle: ParticleBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;

    // Re-derive pool state from scratch before replay.
    world.clear_particles(Substance::Water);
    world.clear_particles(Substance::Sand);

    for r in &bundle.water {
        world.spawn_particle(Substance::Water, Vec2::new(r.x, r.y), Vec2::new(r.vx, r.vy));
    }
    for r in &bundle.sand {
        world.spawn_particle(Substance::Sand, Vec2::new(r.x, r.y), Vec2::new(r.vx, r.vy));
    }

    Ok(())
}

fn record(pos: Vec2, vel: Vec2) -> ParticleRecord {
    ParticleRecord {
        x: pos.x,
        y: pos.y,
        vx: vel.x,
        vy: vel.y,
    }
}
