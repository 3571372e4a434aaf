use crate::domain::substance::{BodyTag, Substance};
use crate::rigid_body::{Material, Shape, Vec2};

use super::WorldCore;

pub(super) fn spawn_particle(
    world: &mut WorldCore,
    substance: Substance,
    position: Vec2,
    velocity: Vec2,
) -> bool {
    let (pool, engine) = match substance {
        Substance::Water => (&mut world.water, &mut world.engine),
        Substance::Sand => (&mut world.sand, &mut world.engine),
    };
    pool.spawn(engine, position, velocity)
}

pub(super) fn spawn_particles_in_radius(
    world: &mut WorldCore,
    substance: Substance,
    center: Vec2,
    radius: f32,
    velocity: Vec2,
) {
    // Fill the brush disc on a grid of one particle diameter.
    let spacing = substance.shape().half_size() * 2.0;
    let steps = (radius / spacing) as i32;
    let r_sq = radius * radius;

    for dy in -steps..=steps {
        for dx in -steps..=steps {
            let offset = Vec2::new(dx as f32 * spacing, dy as f32 * spacing);
            if offset.length_squared() <= r_sq {
                spawn_particle(world, substance, center + offset, velocity);
            }
        }
    }
}

pub(super) fn clear_particles(world: &mut WorldCore, substance: Substance) {
    let (pool, engine) = match substance {
        Substance::Water => (&mut world.water, &mut world.engine),
        Substance::Sand => (&mut world.sand, &mut world.engine),
    };
    pool.deactivate_all(engine);
}

pub(super) fn spawn_debris(world: &mut WorldCore, position: Vec2, half_extent: f32) -> bool {
    let material = Material {
        density: 0.8,
        friction: 0.4,
        restitution: 0.3,
    };
    world
        .engine
        .create_body(
            position,
            Shape::Square { half_extent },
            material,
            BodyTag::Debris,
        )
        .is_ok()
}
