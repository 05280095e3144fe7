use serde::Serialize;

use super::body::BodyId;

pub const DEFAULT_RIGIDITY: f32 = 1.0;
pub const DEFAULT_ELASTICITY: f32 = 0.0;

/// Distance joint between two bodies, referenced by id.
///
/// `rigidity` scales the push-back when the joint is compressed,
/// `1 - elasticity` scales the pull when it is stretched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Joint {
    pub a: BodyId,
    pub b: BodyId,
    /// Rest length
    pub distance: f32,
    pub rigidity: f32,
    pub elasticity: f32,
}

impl Joint {
    pub fn new(a: BodyId, b: BodyId, distance: f32, rigidity: f32, elasticity: f32) -> Self {
        Self { a, b, distance, rigidity, elasticity }
    }

    /// The opposite endpoint when `id` is one of the two ends
    pub fn other(&self, id: BodyId) -> Option<BodyId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }

    /// Correction coefficient for a signed length error
    pub fn coefficient(&self, diff: f32) -> f32 {
        if diff > 0.0 {
            1.0 - self.elasticity
        } else {
            self.rigidity
        }
    }
}
