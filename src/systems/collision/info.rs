use serde::Serialize;

use crate::core::Vec2;

/// Contact between two bodies.
///
/// `depth` is positive when overlapping. `start` and `end` bracket the
/// contact segment, with `end = start + normal * depth`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CollisionInfo {
    pub depth: f32,
    pub normal: Vec2,
    pub start: Vec2,
    pub end: Vec2,
}

impl CollisionInfo {
    pub fn new(depth: f32, normal: Vec2, start: Vec2) -> Self {
        Self {
            depth,
            normal,
            start,
            end: start + normal * depth,
        }
    }

    /// Same contact seen from the other body
    pub fn flipped(&self) -> Self {
        Self {
            depth: self.depth,
            normal: -self.normal,
            start: self.end,
            end: self.start,
        }
    }

    /// Orient the normal from `from` toward `to`
    pub fn oriented(self, from: Vec2, to: Vec2) -> Self {
        if self.normal.dot(to - from) < 0.0 {
            self.flipped()
        } else {
            self
        }
    }
}
