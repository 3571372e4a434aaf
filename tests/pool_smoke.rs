use granula_engine::rigid_body::Vec2;
use granula_engine::{Substance, WorldCore};

#[test]
fn pool_smoke_water_column() {
    let mut world = WorldCore::new(32.0, 32.0, 500, 200).expect("world init");
    world.set_active_ceiling(Substance::Water, 300);

    // Pour a block of water near the top of the world.
    world.spawn_particles_in_radius(Substance::Water, Vec2::new(16.0, 4.0), 2.0, Vec2::zero());
    let poured = world.active_count(Substance::Water);
    assert!(poured > 0);
    assert!(poured <= 300);

    // Simulate one second of wall time, fed in frame-sized deltas the
    // way a render loop would. Each delta covers exactly one sub-step.
    for _ in 0..60 {
        world.update(1.0 / 60.0);
    }
    assert_eq!(world.frame(), 60);

    // Capacity invariant survives the run and nothing escapes the world.
    assert!(world.active_count(Substance::Water) <= 300);
    world.for_each_active_particle(Substance::Water, |pos, _vel| {
        assert!(pos.x >= 0.0 && pos.x <= 32.0, "x escaped: {}", pos.x);
        assert!(pos.y >= 0.0 && pos.y <= 32.0, "y escaped: {}", pos.y);
    });
}

#[test]
fn pool_smoke_sand_pile() {
    let mut world = WorldCore::new(32.0, 32.0, 100, 400).expect("world init");

    world.spawn_particles_in_radius(Substance::Sand, Vec2::new(16.0, 8.0), 1.5, Vec2::zero());
    let spawned = world.active_count(Substance::Sand);
    assert!(spawned > 0);

    // Two seconds of wall time in frame-sized deltas.
    for _ in 0..120 {
        world.update(1.0 / 60.0);
    }

    // Sand only falls and settles; the count never changes on its own.
    assert_eq!(world.active_count(Substance::Sand), spawned);
    world.for_each_active_particle(Substance::Sand, |pos, _vel| {
        assert!(pos.y > 8.0, "sand should have fallen, y = {}", pos.y);
    });
}
