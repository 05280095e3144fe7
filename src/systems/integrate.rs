use crate::domain::Body;

/// Semi-implicit Euler over one tick of `1 / fps` seconds.
///
/// Immobile bodies are skipped. Pinned bodies still accumulate velocity
/// and rotate, but [`Body::move_by`] leaves their position alone.
pub fn integrate(bodies: &mut [Body], fps: f32) {
    let dt = 1.0 / fps;
    for body in bodies.iter_mut().rev() {
        if body.is_static() {
            continue;
        }
        body.velocity += body.acceleration * dt;
        body.move_by(body.velocity * dt);
        body.angular_velocity += body.angular_acceleration * dt;
        body.rotate_by(body.angular_velocity * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::BodyId;

    #[test]
    fn constant_velocity_moves_by_v_over_fps() {
        let mut bodies = vec![Body::new_rect(BodyId(0), Vec2::ZERO, 10.0, 10.0, 1.0, 0.0, 0.0, Vec2::ZERO)];
        bodies[0].velocity = Vec2::new(30.0, -60.0);

        integrate(&mut bodies, 60.0);

        let c = bodies[0].center();
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y + 1.0).abs() < 1e-6);
        // vertices follow the center
        let aabb = bodies[0].aabb();
        assert!((aabb.center().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn angular_acceleration_spins_rectangles() {
        let mut bodies = vec![Body::new_rect(BodyId(0), Vec2::ZERO, 10.0, 2.0, 1.0, 0.0, 0.0, Vec2::ZERO)];
        bodies[0].angular_acceleration = 60.0;

        integrate(&mut bodies, 60.0);

        assert!((bodies[0].angular_velocity - 1.0).abs() < 1e-6);
        assert!((bodies[0].angle() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn static_bodies_are_untouched() {
        let mut bodies = vec![Body::new_circle(BodyId(0), Vec2::ZERO, 5.0, 0.0, 0.0, 0.0, Vec2::new(0.0, 100.0))];
        bodies[0].velocity = Vec2::new(1.0, 1.0);

        integrate(&mut bodies, 60.0);
        assert_eq!(bodies[0].center(), Vec2::ZERO);
    }
}
