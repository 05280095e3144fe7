//! World - caller-owned container that sequences the physics systems
//!
//! `WorldCore` is the native API. `World` (facade.rs) wraps it for JS.
//! Bodies are append-only and keep their insertion order; pair iteration
//! order is fixed, so identical inputs give identical outputs.

use crate::core::{Aabb, Vec2};
use crate::domain::body::body_index;
use crate::domain::{Body, BodyId, EngineError, Joint, WorldSettings};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/sweep.rs"]
mod sweep;
#[path = "query/query.rs"]
mod query;
mod facade;

pub use facade::{Bounds, World};
pub use perf_stats::StepStats;
pub use query::BodySnapshot;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,
    joints: Vec<Joint>,
    settings: WorldSettings,
    next_id: u32,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: StepStats,
}

impl WorldCore {
    /// Empty world with gravity (0, 100) and 0.98 damping
    pub fn new() -> Self {
        init::create_world_core(WorldSettings::default())
    }

    pub fn with_settings(settings: WorldSettings) -> Self {
        init::create_world_core(settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), EngineError> {
        let settings = WorldSettings::from_json(json)?;
        self.apply_settings(settings);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: WorldSettings) {
        settings::apply_settings(self, settings);
    }

    pub fn settings(&self) -> &WorldSettings { &self.settings }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> Vec2 { self.settings.gravity }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, Vec2::new(x, y));
    }

    pub fn set_damping(&mut self, linear: f32, angular: f32) {
        settings::set_damping(self, linear, angular);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        settings::get_perf_stats(self)
    }

    // === BODIES ===

    /// Add a circle. Position and radius are floored; `mass == 0` makes it immobile.
    pub fn create_circle(&mut self, center: Vec2, radius: f32, mass: f32, friction: f32, restitution: f32) -> BodyId {
        commands::create_circle(self, center, radius, mass, friction, restitution)
    }

    /// Add a rectangle. Position and size are floored; `mass == 0` makes it immobile.
    pub fn create_rectangle(
        &mut self,
        center: Vec2,
        width: f32,
        height: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
    ) -> BodyId {
        commands::create_rectangle(self, center, width, height, mass, friction, restitution)
    }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        body_index(&self.bodies, id).map(|i| &self.bodies[i])
    }

    /// Mutable access for hosts that tweak velocities or materials directly.
    /// Geometry stays consistent because position and angle only change
    /// through [`Body::move_by`] and [`Body::rotate_by`].
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        body_index(&self.bodies, id).map(move |i| &mut self.bodies[i])
    }

    pub fn move_body(&mut self, id: BodyId, delta: Vec2) -> Result<(), EngineError> {
        commands::move_body(self, id, delta)
    }

    pub fn rotate_body(&mut self, id: BodyId, angle: f32) -> Result<(), EngineError> {
        commands::rotate_body(self, id, angle)
    }

    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec2) -> Result<(), EngineError> {
        commands::set_velocity(self, id, velocity)
    }

    pub fn set_angular_velocity(&mut self, id: BodyId, w: f32) -> Result<(), EngineError> {
        commands::set_angular_velocity(self, id, w)
    }

    pub fn set_angular_acceleration(&mut self, id: BodyId, a: f32) -> Result<(), EngineError> {
        commands::set_angular_acceleration(self, id, a)
    }

    /// Let a body spin in place: assigns `mass` and pins its position
    pub fn allow_pinned_rotation(&mut self, id: BodyId, mass: f32) -> Result<(), EngineError> {
        commands::allow_pinned_rotation(self, id, mass)
    }

    // === JOINTS ===

    /// Distance joint at the bodies' current separation.
    /// Returns the joint index.
    pub fn create_joint(&mut self, a: BodyId, b: BodyId, rigidity: f32, elasticity: f32) -> Result<usize, EngineError> {
        commands::create_joint(self, a, b, rigidity, elasticity)
    }

    pub fn joints(&self) -> &[Joint] { &self.joints }

    // === STEP ===

    /// Advance the simulation by `1 / fps` seconds
    pub fn step(&mut self, fps: f32) {
        step::step(self, fps);
    }

    // === QUERIES ===

    /// Box enclosing all bodies, `None` when the world is empty
    pub fn bounds(&self) -> Option<Aabb> {
        query::bounds(self)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        query::snapshot(self)
    }

    /// JSON array of [`BodySnapshot`] for renderers
    pub fn bodies_json(&self) -> String {
        query::bodies_json(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
