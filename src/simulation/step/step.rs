use crate::particles::apply_fluid_forces;

use super::{PerfTimer, WorldCore, FIXED_STEP, MAX_FRAME_TIME};

pub(super) fn update(world: &mut WorldCore, real_dt: f32) {
    // Pause gates the whole pipeline before anything runs.
    if world.paused {
        return;
    }

    // Time accumulator: consume whole fixed steps, carry the remainder.
    world.accumulator += real_dt.min(MAX_FRAME_TIME);
    while world.accumulator >= FIXED_STEP {
        step(world);
        world.accumulator -= FIXED_STEP;
    }
}

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.sand_active = world.sand.active_count(&world.engine) as u32;
        world.perf_stats.body_count = world.engine.body_count() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === WATER SNAPSHOT + GRID REBUILD ===
    // Active particles only; the grid never sees parked slots. The grid
    // is transient: nothing from the previous step survives the rebuild.
    world.water.collect_active(&world.engine, &mut world.scratch);
    if perf_on {
        world.perf_stats.water_active = world.scratch.len() as u32;
        let t0 = PerfTimer::start();
        world.grid.rebuild(&world.scratch);
        world.perf_stats.grid_ms = t0.elapsed_ms();
    } else {
        world.grid.rebuild(&world.scratch);
    }

    // === FLUID FORCE PASS ===
    // Strictly after the rebuild and strictly before integration.
    if perf_on {
        let t0 = PerfTimer::start();
        apply_fluid_forces(
            &mut world.engine,
            &world.fluid_params,
            &world.scratch,
            &world.grid,
        );
        world.perf_stats.forces_ms = t0.elapsed_ms();
    } else {
        apply_fluid_forces(
            &mut world.engine,
            &world.fluid_params,
            &world.scratch,
            &world.grid,
        );
    }

    // === ENGINE INTEGRATION ===
    if perf_on {
        let t0 = PerfTimer::start();
        world.engine.step(FIXED_STEP, world.gravity);
        world.perf_stats.engine_ms = t0.elapsed_ms();
    } else {
        world.engine.step(FIXED_STEP, world.gravity);
    }

    world.frame += 1;

    if let Some(t0) = step_start {
        world.perf_stats.step_ms = t0.elapsed_ms();
    }
}
