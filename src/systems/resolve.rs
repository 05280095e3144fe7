//! Impulse-based collision response
//!
//! Positional correction first, then a normal impulse with restitution and
//! a friction impulse capped by the normal impulse. Both bodies are damped
//! after every contact that received an impulse.

use crate::core::Vec2;
use crate::domain::Body;

use super::collision::CollisionInfo;

/// Per-world response parameters
#[derive(Clone, Copy, Debug)]
pub struct ResolveParams {
    pub damping: f32,
    pub angular_damping: f32,
    /// Fraction of the depth removed by positional correction
    pub correction: f32,
}

/// Resolve one contact whose normal points from `s1` to `s2`.
///
/// Returns `true` only when an impulse was applied. A separating pair
/// still gets its positional correction but reports `false`.
pub fn resolve_collision(s1: &mut Body, s2: &mut Body, info: &CollisionInfo, params: &ResolveParams) -> bool {
    if s1.is_static() && s2.is_static() {
        return false;
    }

    let n = info.normal;
    let mass_sum = s1.inv_mass + s2.inv_mass;
    let correction = n * (info.depth / mass_sum * params.correction);
    if correction.length() == 0.0 {
        return false;
    }

    s1.move_by(correction * -s1.inv_mass);
    s2.move_by(correction * s2.inv_mass);

    // Inverse masses weight the points crosswise: the lighter body's point dominates less.
    let start = info.start * (s2.inv_mass / mass_sum);
    let end = info.end * (s1.inv_mass / mass_sum);
    let p = start + end;
    let r1 = p - s1.center;
    let r2 = p - s2.center;

    let v1 = s1.velocity + r1.angular_velocity_at(s1.angular_velocity);
    let v2 = s2.velocity + r2.angular_velocity_at(s2.angular_velocity);
    let relative_velocity = v2 - v1;
    let rv_normal = relative_velocity.dot(n);
    if rv_normal > 0.0 {
        return false;
    }

    let restitution = s1.restitution.min(s2.restitution);
    let friction = s1.friction.min(s2.friction);

    // Normal impulse
    let r1_cross_n = r1.cross(n);
    let r2_cross_n = r2.cross(n);
    let jn = -(1.0 + restitution) * rv_normal
        / (mass_sum + r1_cross_n * r1_cross_n * s1.inv_inertia + r2_cross_n * r2_cross_n * s2.inv_inertia);
    apply_impulse(s1, s2, n * jn, r1_cross_n * jn, r2_cross_n * jn);

    // Friction impulse, opposing the tangential slide
    let tangent = -(relative_velocity - n * relative_velocity.dot(n)).normalize();
    let r1_cross_t = r1.cross(tangent);
    let r2_cross_t = r2.cross(tangent);
    let mut jt = -(1.0 + restitution) * relative_velocity.dot(tangent) * friction
        / (mass_sum + r1_cross_t * r1_cross_t * s1.inv_inertia + r2_cross_t * r2_cross_t * s2.inv_inertia);
    if jt > jn {
        jt = jn;
    }
    apply_impulse(s1, s2, tangent * jt, r1_cross_t * jt, r2_cross_t * jt);

    for body in [&mut *s1, &mut *s2] {
        body.velocity *= params.damping;
        body.angular_velocity *= params.angular_damping;
        if body.pinned {
            body.velocity = Vec2::ZERO;
        }
    }

    true
}

/// `s1` takes the impulse negatively, `s2` positively
#[inline]
fn apply_impulse(s1: &mut Body, s2: &mut Body, impulse: Vec2, torque1: f32, torque2: f32) {
    s1.velocity -= impulse * s1.inv_mass;
    s2.velocity += impulse * s2.inv_mass;
    s1.angular_velocity -= torque1 * s1.inv_inertia;
    s2.angular_velocity += torque2 * s2.inv_inertia;
}
