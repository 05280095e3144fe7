//! Rectangle vs rectangle via the separating axis test on face normals

use crate::core::Vec2;

use super::info::CollisionInfo;

/// Axis of least penetration of `other` into the rectangle `(vertices, normals)`.
///
/// For every face, the support point is the vertex of `other` lying
/// deepest behind that face. A face without any vertex behind it is a
/// separating axis and the test fails. Otherwise the face with the
/// shallowest support wins.
fn find_axis_least_penetration(
    vertices: &[Vec2; 4],
    normals: &[Vec2; 4],
    other: &[Vec2; 4],
) -> Option<CollisionInfo> {
    let mut best: Option<(f32, usize, Vec2)> = None;

    for i in (0..4).rev() {
        let dir = -normals[i];
        let pt_on_edge = vertices[i];

        let mut support: Option<(f32, Vec2)> = None;
        for &v in other.iter().rev() {
            let projection = (v - pt_on_edge).dot(dir);
            if projection > 0.0 && support.map_or(true, |(d, _)| projection > d) {
                support = Some((projection, v));
            }
        }

        let (dist, point) = support?;
        if best.map_or(true, |(d, _, _)| dist < d) {
            best = Some((dist, i, point));
        }
    }

    let (dist, i, point) = best?;
    let n = normals[i];
    Some(CollisionInfo::new(dist, n, point + n * dist))
}

/// Both rectangles as `(vertices, normals)`. The normal points from `r1` to `r2`.
pub fn rect_rect(
    r1: (&[Vec2; 4], &[Vec2; 4]),
    r2: (&[Vec2; 4], &[Vec2; 4]),
) -> Option<CollisionInfo> {
    let from_1 = find_axis_least_penetration(r1.0, r1.1, r2.0)?;
    let from_2 = find_axis_least_penetration(r2.0, r2.1, r1.0)?;

    if from_1.depth <= from_2.depth {
        // start at the vertex of r2 sunk into r1
        let start = from_1.start - from_1.normal * from_1.depth;
        Some(CollisionInfo::new(from_1.depth, from_1.normal, start))
    } else {
        Some(CollisionInfo::new(from_2.depth, -from_2.normal, from_2.start))
    }
}
