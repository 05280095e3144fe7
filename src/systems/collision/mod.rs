//! Collision detection: bounding-circle rejection and narrow-phase tests
//!
//! Every narrow-phase routine returns its contact by value. The normal
//! orientation is whatever the routine produced; callers that need it to
//! point from the first body to the second use [`CollisionInfo::oriented`].

mod broad;
mod circle;
mod info;
mod rect;
mod rect_circle;

pub use broad::bound_test;
pub use circle::circle_circle;
pub use info::CollisionInfo;
pub use rect::rect_rect;
pub use rect_circle::rect_circle;

use crate::domain::{Body, Shape};

/// Narrow-phase test between two bodies.
///
/// Two immobile bodies never collide. For mixed pairs the rectangle is
/// always the reference shape, so the normal of a circle-vs-rectangle
/// contact points from the rectangle toward the circle.
pub fn test_collision(a: &Body, b: &Body) -> Option<CollisionInfo> {
    if a.is_static() && b.is_static() {
        return None;
    }

    match (a.shape(), b.shape()) {
        (Shape::Circle { radius: r1 }, Shape::Circle { radius: r2 }) => {
            circle_circle(a.center(), *r1, b.center(), *r2)
        }
        (
            Shape::Rectangle { vertices: v1, normals: n1, .. },
            Shape::Rectangle { vertices: v2, normals: n2, .. },
        ) => rect_rect((v1, n1), (v2, n2)),
        (Shape::Rectangle { vertices, normals, .. }, Shape::Circle { radius }) => {
            rect_circle(vertices, normals, b.center(), *radius)
        }
        (Shape::Circle { radius }, Shape::Rectangle { vertices, normals, .. }) => {
            rect_circle(vertices, normals, a.center(), *radius)
        }
    }
}
