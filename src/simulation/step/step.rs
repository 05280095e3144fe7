use crate::systems::{integrate, relax_joints, track_rest};

use super::sweep::collision_sweep;
use super::{PerfTimer, WorldCore};

/// One tick of `1 / fps` seconds:
/// integrate, relax joints, sweep collisions, then update rest times.
pub(super) fn step(world: &mut WorldCore, fps: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.joint_count = world.joints.len() as u32;
    }
    let step_timer = PerfTimer::start_if(perf_on);

    // === INTEGRATION ===
    let t0 = PerfTimer::start_if(perf_on);
    integrate(&mut world.bodies, fps);
    let integrate_ms = t0.elapsed_ms();

    // === JOINTS ===
    let t0 = PerfTimer::start_if(perf_on);
    relax_joints(&mut world.bodies, &world.joints, fps);
    let joints_ms = t0.elapsed_ms();

    // === COLLISIONS ===
    let t0 = PerfTimer::start_if(perf_on);
    let outcome = collision_sweep(world);
    let collisions_ms = t0.elapsed_ms();

    // === REST BOOKKEEPING ===
    let t0 = PerfTimer::start_if(perf_on);
    track_rest(&mut world.bodies, fps);
    let rest_ms = t0.elapsed_ms();

    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.integrate_ms = integrate_ms;
        stats.joints_ms = joints_ms;
        stats.collisions_ms = collisions_ms;
        stats.rest_ms = rest_ms;
        stats.sweeps = outcome.sweeps;
        stats.pairs_tested = outcome.pairs_tested;
        stats.contacts_found = outcome.contacts_found;
        stats.contacts_resolved = outcome.contacts_resolved;
        stats.step_ms = step_timer.elapsed_ms();
    }
}
