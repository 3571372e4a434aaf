use crate::rigid_body::RigidBody;

/// Resolve contact with the world bounds, per axis (cheap + deterministic).
///
/// The body is pushed back inside, the normal velocity reflects scaled by
/// restitution and the tangential velocity is damped by friction.
pub(super) fn resolve_world_bounds(body: &mut RigidBody, width: f32, height: f32) {
    let r = body.shape.half_size();
    let restitution = body.material.restitution;
    let tangent_keep = (1.0 - body.material.friction).clamp(0.0, 1.0);

    if body.pos.x < r {
        body.pos.x = r;
        body.velocity.x = -body.velocity.x * restitution;
        body.velocity.y *= tangent_keep;
    } else if body.pos.x > width - r {
        body.pos.x = width - r;
        body.velocity.x = -body.velocity.x * restitution;
        body.velocity.y *= tangent_keep;
    }

    if body.pos.y < r {
        body.pos.y = r;
        body.velocity.y = -body.velocity.y * restitution;
        body.velocity.x *= tangent_keep;
    } else if body.pos.y > height - r {
        body.pos.y = height - r;
        body.velocity.y = -body.velocity.y * restitution;
        body.velocity.x *= tangent_keep;
    }
}
