use granula_engine::rigid_body::Vec2;
use granula_engine::{Substance, WorldCore};

#[test]
fn perf_smoke_step() {
    let mut world = WorldCore::new(64.0, 64.0, 1000, 200).expect("world init");
    world.enable_perf_metrics(true);
    world.spawn_particles_in_radius(Substance::Water, Vec2::new(32.0, 16.0), 4.0, Vec2::zero());

    world.step();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.water_active() > 0);
    assert_eq!(stats.body_count(), 1200);
}
