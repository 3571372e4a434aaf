use crate::domain::substance::Substance;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity.x = x;
    world.gravity.y = y;
}

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    world.paused = paused;
}

pub(super) fn is_paused(world: &WorldCore) -> bool {
    world.paused
}

pub(super) fn set_fluid_params(
    world: &mut WorldCore,
    stiffness: f32,
    viscosity: f32,
    repulsion: f32,
    interaction_radius: f32,
) {
    world.fluid_params.stiffness = stiffness;
    world.fluid_params.viscosity = viscosity;
    world.fluid_params.repulsion = repulsion;
    if interaction_radius > 0.0 {
        world.fluid_params.interaction_radius = interaction_radius;
        // Cell size tracks the radius so the 3x3 scan stays complete.
        world.grid.set_cell_size(interaction_radius);
    }
}

pub(super) fn set_active_ceiling(world: &mut WorldCore, substance: Substance, ceiling: usize) {
    let (pool, engine) = match substance {
        Substance::Water => (&mut world.water, &mut world.engine),
        Substance::Sand => (&mut world.sand, &mut world.engine),
    };
    pool.set_active_ceiling(engine, ceiling);
}
