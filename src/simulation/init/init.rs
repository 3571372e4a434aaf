use crate::domain::substance::Substance;
use crate::particles::{FluidParams, ParticlePool, SpatialHash};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::RigidBodyEngine;

use super::perf_stats::PerfStats;
use super::{WorldCore, DEBRIS_BUDGET};

pub(super) fn create_world_core(
    width: f32,
    height: f32,
    water_capacity: usize,
    sand_capacity: usize,
) -> Result<WorldCore, String> {
    let mut engine = RigidBodyEngine::new(
        width,
        height,
        water_capacity + sand_capacity + DEBRIS_BUDGET,
    );

    // Pool allocation failure is fatal: it means a misconfigured or
    // exhausted engine, so it propagates instead of retrying.
    let water = ParticlePool::new(&mut engine, Substance::Water, water_capacity)?;
    let sand = ParticlePool::new(&mut engine, Substance::Sand, sand_capacity)?;

    let fluid_params = FluidParams::default();

    Ok(WorldCore {
        grid: SpatialHash::new(fluid_params.interaction_radius),
        scratch: Vec::with_capacity(water_capacity),
        engine,
        water,
        sand,
        fluid_params,
        width,
        height,
        gravity: Vec2::new(0.0, 9.8),
        paused: false,
        accumulator: 0.0,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
