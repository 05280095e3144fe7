//! Distance-joint relaxation
//!
//! Each movable endpoint corrects its own share of the length error: the
//! whole error when the other end is immobile, half of it otherwise (the
//! other end corrects the other half on its own turn).

use crate::domain::body::body_index;
use crate::domain::{Body, Joint};

/// Endpoints closer than this have no usable direction and are left alone
pub const MIN_JOINT_LENGTH: f32 = f32::EPSILON;

/// Nudge every movable body toward the rest length of its joints.
///
/// Position corrections are mirrored into velocity (`correction * fps`)
/// so the next integration keeps moving the body the same way. Joints
/// whose other end no longer resolves are skipped.
pub fn relax_joints(bodies: &mut [Body], joints: &[Joint], fps: f32) {
    if joints.is_empty() {
        return;
    }

    for i in 0..bodies.len() {
        if bodies[i].is_static() {
            continue;
        }
        let id = bodies[i].id;

        for joint in joints {
            let Some(other_id) = joint.other(id) else {
                continue;
            };
            let Some(j) = body_index(bodies, other_id) else {
                log::debug!("joint {} -> {}: endpoint missing, skipped", id, other_id);
                continue;
            };
            if j == i {
                continue;
            }

            let other_center = bodies[j].center;
            let other_static = bodies[j].is_static();

            let body = &mut bodies[i];
            let to_other = other_center - body.center;
            let length = to_other.length();
            if length < MIN_JOINT_LENGTH {
                log::debug!("joint {} -> {}: coincident endpoints, skipped", id, other_id);
                continue;
            }

            let diff = length - joint.distance;
            if diff == 0.0 {
                continue;
            }

            let share = if other_static { 1.0 } else { 0.5 };
            let correction = to_other * ((1.0 / length) * diff * joint.coefficient(diff) * share);
            body.move_by(correction);
            body.velocity += correction * fps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::BodyId;

    fn ball(id: u32, x: f32, mass: f32) -> Body {
        Body::new_circle(BodyId(id), Vec2::new(x, 0.0), 2.0, mass, 0.0, 0.0, Vec2::ZERO)
    }

    #[test]
    fn rigid_joint_to_anchor_snaps_to_rest_length() {
        let mut bodies = vec![ball(0, 0.0, 0.0), ball(1, 30.0, 1.0)];
        let joints = [Joint::new(BodyId(0), BodyId(1), 20.0, 1.0, 0.0)];

        relax_joints(&mut bodies, &joints, 60.0);

        assert_eq!(bodies[0].center(), Vec2::ZERO);
        assert!((bodies[1].center().x - 20.0).abs() < 1e-5);
        assert!((bodies[1].velocity.x + 600.0).abs() < 1e-2);
    }

    #[test]
    fn movable_pair_splits_the_error() {
        let mut bodies = vec![ball(0, 0.0, 1.0), ball(1, 30.0, 1.0)];
        let joints = [Joint::new(BodyId(0), BodyId(1), 20.0, 1.0, 0.0)];

        relax_joints(&mut bodies, &joints, 60.0);

        // body 0 fixes half (5), then body 1 fixes half of the remaining 5
        assert!((bodies[0].center().x - 5.0).abs() < 1e-5);
        assert!((bodies[1].center().x - 27.5).abs() < 1e-5);
    }

    #[test]
    fn fully_elastic_joint_does_not_pull() {
        let mut bodies = vec![ball(0, 0.0, 0.0), ball(1, 30.0, 1.0)];
        let joints = [Joint::new(BodyId(0), BodyId(1), 20.0, 1.0, 1.0)];

        relax_joints(&mut bodies, &joints, 60.0);
        assert_eq!(bodies[1].center().x, 30.0);
    }

    #[test]
    fn compressed_joint_pushes_with_rigidity() {
        let mut bodies = vec![ball(0, 0.0, 0.0), ball(1, 10.0, 1.0)];
        let joints = [Joint::new(BodyId(0), BodyId(1), 20.0, 0.5, 0.0)];

        relax_joints(&mut bodies, &joints, 60.0);
        assert!((bodies[1].center().x - 15.0).abs() < 1e-5);
    }

    #[test]
    fn missing_endpoint_and_coincident_ends_are_skipped() {
        let mut bodies = vec![ball(0, 0.0, 1.0), ball(1, 0.0, 1.0)];
        let joints = [
            Joint::new(BodyId(0), BodyId(7), 20.0, 1.0, 0.0),
            Joint::new(BodyId(0), BodyId(1), 20.0, 1.0, 0.0),
        ];

        relax_joints(&mut bodies, &joints, 60.0);
        assert_eq!(bodies[0].center(), Vec2::ZERO);
        assert_eq!(bodies[1].center(), Vec2::ZERO);
        assert!(bodies[0].velocity.is_finite());
    }
}
