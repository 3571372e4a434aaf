use super::*;
use crate::domain::substance::Substance;
use crate::particles::{apply_fluid_forces, ParticlePool, SpatialHash, SENTINEL};
use crate::rigid_body_system::RigidBodyEngine;

fn world(water: usize, sand: usize) -> WorldCore {
    WorldCore::new(64.0, 64.0, water, sand).expect("world init")
}

#[test]
fn spawn_never_exceeds_active_ceiling() {
    let mut world = world(16, 4);
    world.set_active_ceiling(Substance::Water, 10);

    for i in 0..25 {
        assert!(world.spawn_particle(
            Substance::Water,
            Vec2::new(1.0 + i as f32, 5.0),
            Vec2::zero()
        ));
    }

    assert_eq!(world.active_count(Substance::Water), 10);
}

#[test]
fn ring_recycling_overwrites_oldest_slot() {
    let mut world = world(4, 4);

    for i in 0..4 {
        world.spawn_particle(
            Substance::Water,
            Vec2::new(10.0 + i as f32, 5.0),
            Vec2::zero(),
        );
    }
    // Fifth spawn wraps to slot 0 and overwrites the first particle.
    world.spawn_particle(Substance::Water, Vec2::new(42.0, 7.0), Vec2::new(3.0, -1.0));

    let slot0 = world.water.slot_handle(0);
    assert_eq!(world.engine.position(slot0), Vec2::new(42.0, 7.0));
    assert_eq!(world.engine.velocity(slot0), Vec2::new(3.0, -1.0));
    assert_eq!(world.active_count(Substance::Water), 4);
}

#[test]
fn deactivate_all_parks_every_slot() {
    let mut world = world(8, 8);
    for i in 0..8 {
        world.spawn_particle(
            Substance::Water,
            Vec2::new(2.0 + i as f32, 3.0),
            Vec2::new(1.0, 1.0),
        );
    }

    world.clear_particles(Substance::Water);

    assert_eq!(world.active_count(Substance::Water), 0);
    for i in 0..8 {
        let handle = world.water.slot_handle(i);
        assert!(!world.engine.is_active(handle));
        assert_eq!(world.engine.position(handle), SENTINEL);
        assert_eq!(world.engine.velocity(handle), Vec2::zero());
    }
}

#[test]
fn ceiling_reduction_parks_only_high_slots() {
    let mut world = world(100, 4);
    for i in 0..100 {
        world.spawn_particle(
            Substance::Water,
            Vec2::new(1.0 + (i % 60) as f32, 1.0 + (i / 60) as f32),
            Vec2::zero(),
        );
    }
    let kept: Vec<Vec2> = (0..40)
        .map(|i| world.engine.position(world.water.slot_handle(i)))
        .collect();

    world.set_active_ceiling(Substance::Water, 40);

    assert_eq!(world.active_count(Substance::Water), 40);
    for i in 0..40 {
        let handle = world.water.slot_handle(i);
        assert!(world.engine.is_active(handle));
        assert_eq!(world.engine.position(handle), kept[i]);
    }
    for i in 40..100 {
        let handle = world.water.slot_handle(i);
        assert!(!world.engine.is_active(handle));
        assert_eq!(world.engine.position(handle), SENTINEL);
    }
}

#[test]
fn ceiling_write_with_same_value_keeps_cursor() {
    let mut world = world(4, 4);
    world.spawn_particle(Substance::Water, Vec2::new(5.0, 5.0), Vec2::zero());
    world.spawn_particle(Substance::Water, Vec2::new(6.0, 5.0), Vec2::zero());

    // Idempotent setter: calling every frame with the same value must not
    // disturb the ring.
    world.set_active_ceiling(Substance::Water, 4);

    world.spawn_particle(Substance::Water, Vec2::new(7.0, 5.0), Vec2::zero());
    let slot2 = world.water.slot_handle(2);
    assert!(world.engine.is_active(slot2));
    assert_eq!(world.engine.position(slot2), Vec2::new(7.0, 5.0));
}

#[test]
fn spawn_rejected_when_pool_disabled() {
    let mut world = world(8, 8);
    world.set_active_ceiling(Substance::Sand, 0);

    assert!(!world.spawn_particle(Substance::Sand, Vec2::new(5.0, 5.0), Vec2::zero()));
    assert_eq!(world.active_count(Substance::Sand), 0);
}

#[test]
fn pool_init_fails_on_exhausted_body_budget() {
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 2);
    let result = ParticlePool::new(&mut engine, Substance::Water, 5);
    assert!(result.is_err());
}

#[test]
fn grid_contains_every_neighbor_within_radius() {
    let radius = 0.5f32;
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 64);
    let mut pool = ParticlePool::new(&mut engine, Substance::Water, 64).expect("pool");

    // Scatter a deterministic cloud, including pairs straddling cell edges.
    let mut x = 1.0f32;
    let mut y = 1.0f32;
    for _ in 0..64 {
        pool.spawn(&mut engine, Vec2::new(x, y), Vec2::zero());
        x = 1.0 + (x * 7.3 + y * 3.1) % 5.0;
        y = 1.0 + (y * 5.7 + x * 1.9) % 5.0;
    }

    let mut views = Vec::new();
    pool.collect_active(&engine, &mut views);
    let mut grid = SpatialHash::new(radius);
    grid.rebuild(&views);

    for (i, p) in views.iter().enumerate() {
        let mut candidates = Vec::new();
        grid.for_each_candidate(p.position, |j| candidates.push(j));

        for (j, q) in views.iter().enumerate() {
            if i == j {
                continue;
            }
            if (p.position - q.position).length() < radius {
                assert!(
                    candidates.contains(&j),
                    "particle {} missing from candidate set of {}",
                    j,
                    i
                );
            }
        }
    }
}

#[test]
fn zero_neighbor_particle_gets_zero_force() {
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 8);
    let mut pool = ParticlePool::new(&mut engine, Substance::Water, 8).expect("pool");
    pool.spawn(&mut engine, Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0));
    // Second particle well outside the interaction radius.
    pool.spawn(&mut engine, Vec2::new(30.0, 30.0), Vec2::zero());

    let params = crate::particles::FluidParams::default();
    let mut views = Vec::new();
    pool.collect_active(&engine, &mut views);
    let mut grid = SpatialHash::new(params.interaction_radius);
    grid.rebuild(&views);

    apply_fluid_forces(&mut engine, &params, &views, &grid);

    for view in &views {
        assert_eq!(engine.accumulated_force(view.handle), Vec2::zero());
    }
}

#[test]
fn force_clamped_at_max_for_near_coincident_particles() {
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 8);
    let mut pool = ParticlePool::new(&mut engine, Substance::Water, 8).expect("pool");
    // Nearly coincident: degenerate configuration that produces a huge
    // raw pressure force.
    pool.spawn(&mut engine, Vec2::new(10.0, 10.0), Vec2::zero());
    pool.spawn(&mut engine, Vec2::new(10.001, 10.0), Vec2::zero());

    let params = crate::particles::FluidParams::default();
    let mut views = Vec::new();
    pool.collect_active(&engine, &mut views);
    let mut grid = SpatialHash::new(params.interaction_radius);
    grid.rebuild(&views);

    apply_fluid_forces(&mut engine, &params, &views, &grid);

    for view in &views {
        let magnitude = engine.accumulated_force(view.handle).length();
        assert!(magnitude <= params.max_force + 1e-2, "force {} over cap", magnitude);
    }
    // The clamp rescales to exactly the cap, it does not zero the force.
    let first = engine.accumulated_force(views[0].handle).length();
    assert!((first - params.max_force).abs() < 1e-2);
}

#[test]
fn force_stays_bounded_for_exactly_coincident_particles() {
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 8);
    let mut pool = ParticlePool::new(&mut engine, Substance::Water, 8).expect("pool");
    // Two particles at the identical position: distance is exactly zero,
    // so the direction is undefined and the pair must be excluded from
    // the pressure push instead of dividing by zero.
    pool.spawn(&mut engine, Vec2::new(10.0, 10.0), Vec2::zero());
    pool.spawn(&mut engine, Vec2::new(10.0, 10.0), Vec2::zero());
    // A third nearby particle so the coincident pair still gets a
    // nonzero, clampable force.
    pool.spawn(&mut engine, Vec2::new(10.2, 10.0), Vec2::zero());

    let params = crate::particles::FluidParams::default();
    let mut views = Vec::new();
    pool.collect_active(&engine, &mut views);
    let mut grid = SpatialHash::new(params.interaction_radius);
    grid.rebuild(&views);

    apply_fluid_forces(&mut engine, &params, &views, &grid);

    for view in &views {
        let force = engine.accumulated_force(view.handle);
        assert!(force.x.is_finite() && force.y.is_finite());
        assert!(
            force.length() <= params.max_force + 1e-2,
            "force {} over cap",
            force.length()
        );
    }
}

#[test]
fn pressure_pushes_particles_apart() {
    let mut engine = RigidBodyEngine::new(64.0, 64.0, 8);
    let mut pool = ParticlePool::new(&mut engine, Substance::Water, 8).expect("pool");
    pool.spawn(&mut engine, Vec2::new(10.0, 10.0), Vec2::zero());
    pool.spawn(&mut engine, Vec2::new(10.3, 10.0), Vec2::zero());

    let params = crate::particles::FluidParams::default();
    let mut views = Vec::new();
    pool.collect_active(&engine, &mut views);
    let mut grid = SpatialHash::new(params.interaction_radius);
    grid.rebuild(&views);

    apply_fluid_forces(&mut engine, &params, &views, &grid);

    assert!(engine.accumulated_force(views[0].handle).x < 0.0);
    assert!(engine.accumulated_force(views[1].handle).x > 0.0);
}

#[test]
fn fluid_params_update_retargets_grid_cell_size() {
    let mut world = world(4, 4);
    world.set_fluid_params(80.0, 10.0, 3.0, 1.25);

    assert_eq!(world.fluid_params().interaction_radius, 1.25);
    assert_eq!(world.grid.cell_size(), 1.25);
}

#[test]
fn accumulator_consumes_whole_steps_only() {
    let mut world = world(4, 4);

    world.update(FIXED_STEP * 2.5);

    assert_eq!(world.frame(), 2);
    assert!((world.accumulator - FIXED_STEP * 0.5).abs() < 1e-6);
}

#[test]
fn paused_world_does_not_step() {
    let mut world = world(4, 4);
    world.set_paused(true);

    world.update(1.0);

    assert_eq!(world.frame(), 0);
    assert_eq!(world.accumulator, 0.0);
}

#[test]
fn frame_spike_is_clamped_not_replayed() {
    let mut world = world(4, 4);

    // A one-second hitch feeds at most MAX_FRAME_TIME into the
    // accumulator instead of triggering a full catch-up burst.
    world.update(1.0);

    let max_steps = (MAX_FRAME_TIME / FIXED_STEP) as u64;
    assert!(world.frame() <= max_steps, "ran {} steps", world.frame());
    assert!(world.frame() >= max_steps - 1);
}

#[test]
fn gravity_pulls_active_particles_down() {
    let mut world = world(4, 4);
    world.spawn_particle(Substance::Sand, Vec2::new(32.0, 10.0), Vec2::zero());

    for _ in 0..30 {
        world.step();
    }

    let handle = world.sand.slot_handle(0);
    let pos = world.engine.position(handle);
    assert!(pos.y > 10.0, "sand should have fallen, y = {}", pos.y);
    assert!(pos.y <= 64.0);
}

#[test]
fn snapshot_roundtrip_reproduces_particle_state() {
    let mut world = world(16, 16);
    world.spawn_particle(Substance::Water, Vec2::new(3.5, 4.25), Vec2::new(0.5, -0.125));
    world.spawn_particle(Substance::Water, Vec2::new(7.0, 9.5), Vec2::new(-1.5, 2.0));
    world.spawn_particle(Substance::Sand, Vec2::new(20.0, 30.0), Vec2::new(0.0, 3.0));

    let json = world.save_particles_json().expect("save");
    let before = collect_state(&world);

    // Scribble over the state, then restore.
    world.spawn_particle(Substance::Water, Vec2::new(50.0, 50.0), Vec2::zero());
    world.clear_particles(Substance::Sand);
    world.load_particles_json(&json).expect("load");

    assert_eq!(collect_state(&world), before);
}

#[test]
fn debris_spawn_fails_when_budget_exhausted() {
    let mut world = world(2, 2);
    for _ in 0..DEBRIS_BUDGET {
        assert!(world.spawn_debris(Vec2::new(32.0, 32.0), 0.5));
    }
    assert!(!world.spawn_debris(Vec2::new(32.0, 32.0), 0.5));
}

fn collect_state(world: &WorldCore) -> Vec<(u8, [f32; 4])> {
    let mut out = Vec::new();
    for substance in [Substance::Water, Substance::Sand] {
        world.for_each_active_particle(substance, |pos, vel| {
            out.push((substance.id(), [pos.x, pos.y, vel.x, vel.y]));
        });
    }
    out
}
