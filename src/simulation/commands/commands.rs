use crate::core::Vec2;
use crate::domain::body::body_index;
use crate::domain::{Body, BodyId, EngineError, Joint};

use super::WorldCore;

fn next_id(world: &mut WorldCore) -> BodyId {
    let id = BodyId(world.next_id);
    world.next_id = world.next_id.saturating_add(1);
    id
}

pub(super) fn create_circle(
    world: &mut WorldCore,
    center: Vec2,
    radius: f32,
    mass: f32,
    friction: f32,
    restitution: f32,
) -> BodyId {
    let id = next_id(world);
    let gravity = world.settings.gravity;
    world
        .bodies
        .push(Body::new_circle(id, center, radius, mass, friction, restitution, gravity));
    id
}

pub(super) fn create_rectangle(
    world: &mut WorldCore,
    center: Vec2,
    width: f32,
    height: f32,
    mass: f32,
    friction: f32,
    restitution: f32,
) -> BodyId {
    let id = next_id(world);
    let gravity = world.settings.gravity;
    world
        .bodies
        .push(Body::new_rect(id, center, width, height, mass, friction, restitution, gravity));
    id
}

/// Join two bodies at their current distance plus the configured margin.
pub(super) fn create_joint(
    world: &mut WorldCore,
    a: BodyId,
    b: BodyId,
    rigidity: f32,
    elasticity: f32,
) -> Result<usize, EngineError> {
    let ia = body_index(&world.bodies, a).ok_or(EngineError::UnknownBody(a))?;
    let ib = body_index(&world.bodies, b).ok_or(EngineError::UnknownBody(b))?;

    let distance = world.bodies[ia].center().distance(world.bodies[ib].center()) + world.settings.joint_margin;
    world.joints.push(Joint::new(a, b, distance, rigidity, elasticity));
    log::debug!("joint {} <-> {} rest length {}", a, b, distance);
    Ok(world.joints.len() - 1)
}

fn body_mut(world: &mut WorldCore, id: BodyId) -> Result<&mut Body, EngineError> {
    let idx = body_index(&world.bodies, id).ok_or(EngineError::UnknownBody(id))?;
    Ok(&mut world.bodies[idx])
}

pub(super) fn allow_pinned_rotation(world: &mut WorldCore, id: BodyId, mass: f32) -> Result<(), EngineError> {
    body_mut(world, id)?.allow_pinned_rotation(mass);
    Ok(())
}

pub(super) fn move_body(world: &mut WorldCore, id: BodyId, delta: Vec2) -> Result<(), EngineError> {
    body_mut(world, id)?.move_by(delta);
    Ok(())
}

pub(super) fn rotate_body(world: &mut WorldCore, id: BodyId, angle: f32) -> Result<(), EngineError> {
    body_mut(world, id)?.rotate_by(angle);
    Ok(())
}

pub(super) fn set_velocity(world: &mut WorldCore, id: BodyId, velocity: Vec2) -> Result<(), EngineError> {
    body_mut(world, id)?.velocity = velocity;
    Ok(())
}

pub(super) fn set_angular_velocity(world: &mut WorldCore, id: BodyId, w: f32) -> Result<(), EngineError> {
    body_mut(world, id)?.angular_velocity = w;
    Ok(())
}

pub(super) fn set_angular_acceleration(world: &mut WorldCore, id: BodyId, a: f32) -> Result<(), EngineError> {
    body_mut(world, id)?.angular_acceleration = a;
    Ok(())
}
