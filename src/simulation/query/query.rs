use serde::Serialize;

use crate::core::Aabb;
use crate::domain::{Body, Shape, ShapeKind};

use super::WorldCore;

/// Flat, render-oriented view of a body
#[derive(Clone, Debug, Serialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub resting_time: f32,
    pub user_data: u64,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        let (radius, width, height) = match body.shape() {
            Shape::Circle { radius } => (Some(*radius), None, None),
            Shape::Rectangle { width, height, .. } => (None, Some(*width), Some(*height)),
        };
        let center = body.center();
        BodySnapshot {
            id: body.id().0,
            kind: body.kind(),
            x: center.x,
            y: center.y,
            angle: body.angle(),
            radius,
            width,
            height,
            resting_time: body.resting_time(),
            user_data: body.user_data,
        }
    }
}

/// Box enclosing every body (camera framing). `None` for an empty world.
pub(super) fn bounds(world: &WorldCore) -> Option<Aabb> {
    let mut iter = world.bodies.iter();
    let mut aabb = iter.next()?.aabb();
    for body in iter {
        aabb.merge(&body.aabb());
    }
    Some(aabb)
}

pub(super) fn snapshot(world: &WorldCore) -> Vec<BodySnapshot> {
    world.bodies.iter().map(BodySnapshot::from).collect()
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    serde_json::to_string(&snapshot(world)).unwrap_or_else(|e| {
        log::warn!("body snapshot serialization failed: {}", e);
        "[]".to_string()
    })
}
