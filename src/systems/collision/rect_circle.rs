//! Rectangle vs circle
//!
//! Faces are scanned in a fixed order and the first face the circle
//! center lies outside of is taken as the reference face, even when
//! another face would give a shallower contact near a corner.

use crate::core::Vec2;

use super::info::CollisionInfo;

/// The normal points from the rectangle toward the circle.
pub fn rect_circle(
    vertices: &[Vec2; 4],
    normals: &[Vec2; 4],
    center: Vec2,
    radius: f32,
) -> Option<CollisionInfo> {
    let mut inside = true;
    let mut best_distance = f32::MIN;
    let mut nearest_edge = 0;

    for i in (0..4).rev() {
        let projection = (center - vertices[i]).dot(normals[i]);
        if projection > 0.0 {
            best_distance = projection;
            nearest_edge = i;
            inside = false;
            break;
        }
        if projection > best_distance {
            best_distance = projection;
            nearest_edge = i;
        }
    }

    let face_normal = normals[nearest_edge];

    if inside {
        let start = center - face_normal * radius;
        return Some(CollisionInfo::new(radius - best_distance, face_normal, start));
    }

    let edge_start = vertices[nearest_edge];
    let edge_end = vertices[(nearest_edge + 1) % 4];

    // Region left of the face: nearest feature is the face's first vertex
    let to_center = center - edge_start;
    let edge = edge_end - edge_start;
    if to_center.dot(edge) < 0.0 {
        return corner_contact(to_center, center, radius);
    }

    // Region right of the face: nearest feature is the face's second vertex
    let to_center = center - edge_end;
    if to_center.dot(-edge) < 0.0 {
        return corner_contact(to_center, center, radius);
    }

    // Face region
    if best_distance < radius {
        let start = center - face_normal * radius;
        Some(CollisionInfo::new(radius - best_distance, face_normal, start))
    } else {
        None
    }
}

fn corner_contact(to_center: Vec2, center: Vec2, radius: f32) -> Option<CollisionInfo> {
    let dist = to_center.length();
    if dist > radius {
        return None;
    }
    let normal = to_center.normalize();
    Some(CollisionInfo::new(radius - dist, normal, center - normal * radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shape;

    fn ground() -> ([Vec2; 4], [Vec2; 4]) {
        match Shape::rectangle(Vec2::ZERO, 100.0, 20.0) {
            Shape::Rectangle { vertices, normals, .. } => (vertices, normals),
            Shape::Circle { .. } => unreachable!(),
        }
    }

    #[test]
    fn center_inside_uses_least_negative_face() {
        let (v, n) = ground();
        let info = rect_circle(&v, &n, Vec2::new(0.0, -5.0), 10.0).unwrap();
        assert_eq!(info.normal, Vec2::new(0.0, -1.0));
        assert!((info.depth - 15.0).abs() < 1e-5);
    }

    #[test]
    fn resting_on_top_face() {
        let (v, n) = ground();
        let info = rect_circle(&v, &n, Vec2::new(10.0, -18.0), 10.0).unwrap();
        assert_eq!(info.normal, Vec2::new(0.0, -1.0));
        assert!((info.depth - 2.0).abs() < 1e-5);
        assert_eq!(info.start, Vec2::new(10.0, -8.0));
    }

    #[test]
    fn above_top_face_out_of_reach() {
        let (v, n) = ground();
        assert!(rect_circle(&v, &n, Vec2::new(0.0, -25.0), 10.0).is_none());
    }

    #[test]
    fn corner_region_contact_points_away_from_corner() {
        let (v, n) = ground();
        // just beyond the top-right corner (50, -10)
        let info = rect_circle(&v, &n, Vec2::new(53.0, -14.0), 10.0).unwrap();
        assert!((info.depth - 5.0).abs() < 1e-5);
        assert!((info.normal.x - 0.6).abs() < 1e-5);
        assert!((info.normal.y + 0.8).abs() < 1e-5);
    }

    #[test]
    fn far_vertex_region_contact_points_away_from_corner() {
        let (v, n) = ground();
        // beyond the top-left corner (-50, -10), past the end of the top face
        let info = rect_circle(&v, &n, Vec2::new(-53.0, -14.0), 10.0).unwrap();
        assert!((info.depth - 5.0).abs() < 1e-5);
        assert!((info.normal.x + 0.6).abs() < 1e-5);
        assert!((info.normal.y + 0.8).abs() < 1e-5);
        assert!((info.start - Vec2::new(-47.0, -6.0)).length() < 1e-4);
        assert!((info.end - Vec2::new(-50.0, -10.0)).length() < 1e-4);

        assert!(rect_circle(&v, &n, Vec2::new(-58.0, -18.0), 10.0).is_none());
    }

    #[test]
    fn corner_region_out_of_reach() {
        let (v, n) = ground();
        assert!(rect_circle(&v, &n, Vec2::new(58.0, -18.0), 10.0).is_none());
    }
}
