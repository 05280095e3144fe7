use serde::Serialize;

use crate::core::Vec2;

/// Vertex slots of a rectangle, relative to its unrotated frame
pub const TOP_LEFT: usize = 0;
pub const TOP_RIGHT: usize = 1;
pub const BOTTOM_RIGHT: usize = 2;
pub const BOTTOM_LEFT: usize = 3;

/// Discriminant of [`Shape`], handy for renderers and dispatch tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

/// Collision geometry of a body.
///
/// Rectangle vertices are stored in world space with winding
/// TopLeft, TopRight, BottomRight, BottomLeft. Face `i` runs from
/// `vertices[i]` to `vertices[(i + 1) % 4]` and `normals[i]` is its
/// outward unit normal (face 0 = top, 1 = right, 2 = bottom, 3 = left
/// with y pointing down).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle {
        radius: f32,
    },
    Rectangle {
        width: f32,
        height: f32,
        vertices: [Vec2; 4],
        normals: [Vec2; 4],
    },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle { radius }
    }

    /// Axis-aligned rectangle centered on `center`
    pub fn rectangle(center: Vec2, width: f32, height: f32) -> Self {
        let vertices = rect_vertices(center, width, height);
        Shape::Rectangle {
            width,
            height,
            vertices,
            normals: face_normals(&vertices),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Bounding-circle radius (the circle radius itself for circles,
    /// half the diagonal for rectangles)
    pub fn bounds(&self) -> f32 {
        match self {
            Shape::Circle { radius } => *radius,
            Shape::Rectangle { width, height, .. } => width.hypot(*height) / 2.0,
        }
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        if let Shape::Rectangle { vertices, .. } = self {
            for v in vertices.iter_mut() {
                *v += delta;
            }
        }
    }

    pub(crate) fn rotate(&mut self, center: Vec2, angle: f32) {
        if let Shape::Rectangle { vertices, normals, .. } = self {
            for v in vertices.iter_mut() {
                *v = v.rotate_about(center, angle);
            }
            *normals = face_normals(vertices);
        }
    }
}

pub fn rect_vertices(center: Vec2, width: f32, height: f32) -> [Vec2; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Vec2::new(center.x - hw, center.y - hh),
        Vec2::new(center.x + hw, center.y - hh),
        Vec2::new(center.x + hw, center.y + hh),
        Vec2::new(center.x - hw, center.y + hh),
    ]
}

/// Outward normal of face `i` is the direction from vertex `i+2` to `i+1`
pub fn face_normals(vertices: &[Vec2; 4]) -> [Vec2; 4] {
    let mut normals = [Vec2::ZERO; 4];
    for (i, n) in normals.iter_mut().enumerate() {
        *n = (vertices[(i + 1) % 4] - vertices[(i + 2) % 4]).normalize();
    }
    normals
}
