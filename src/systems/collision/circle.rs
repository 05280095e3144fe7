use crate::core::Vec2;

use super::info::CollisionInfo;

/// Circle vs circle. The normal points from `c1` toward `c2`; the contact
/// starts on the surface of `c2`.
pub fn circle_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> Option<CollisionInfo> {
    let from_1_to_2 = c2 - c1;
    let r_sum = r1 + r2;
    let dist = from_1_to_2.length();
    if dist > (r_sum * r_sum).sqrt() {
        return None;
    }

    let normal_from_2_to_1 = (-from_1_to_2).normalize();
    let surface_on_2 = c2 + normal_from_2_to_1 * r2;
    Some(CollisionInfo::new(r_sum - dist, from_1_to_2.normalize(), surface_on_2))
}
