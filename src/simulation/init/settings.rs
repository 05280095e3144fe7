use crate::core::Vec2;
use crate::domain::WorldSettings;
use crate::systems::ResolveParams;

use super::perf_stats::StepStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> StepStats {
    world.perf_stats.clone()
}

/// Gravity drives the acceleration of every movable body that was created
/// with a finite mass, pinned ones included. Bodies that started immobile
/// keep theirs.
pub(super) fn set_gravity(world: &mut WorldCore, gravity: Vec2) {
    world.settings.gravity = gravity;
    for body in world.bodies.iter_mut() {
        if !body.is_static() && body.gravity_driven {
            body.acceleration = gravity;
        }
    }
}

pub(super) fn set_damping(world: &mut WorldCore, linear: f32, angular: f32) {
    world.settings.damping = linear;
    world.settings.angular_damping = angular;
}

pub(super) fn apply_settings(world: &mut WorldCore, settings: WorldSettings) {
    log::debug!(
        "world settings: gravity=({}, {}) damping={}/{} iterations={}",
        settings.gravity.x,
        settings.gravity.y,
        settings.damping,
        settings.angular_damping,
        settings.collision_iterations
    );
    let gravity = settings.gravity;
    world.settings = settings;
    set_gravity(world, gravity);
}

pub(super) fn resolve_params(world: &WorldCore) -> ResolveParams {
    ResolveParams {
        damping: world.settings.damping,
        angular_damping: world.settings.angular_damping,
        correction: world.settings.positional_correction,
    }
}
