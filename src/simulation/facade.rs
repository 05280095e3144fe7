use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::joint::{DEFAULT_ELASTICITY, DEFAULT_RIGIDITY};
use crate::domain::{BodyId, EngineError};

use super::perf_stats::StepStats;
use super::WorldCore;

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Axis-aligned box handed to JS for camera framing
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

#[wasm_bindgen]
impl Bounds {
    #[wasm_bindgen(getter)]
    pub fn min_x(&self) -> f32 { self.min_x }
    #[wasm_bindgen(getter)]
    pub fn min_y(&self) -> f32 { self.min_y }
    #[wasm_bindgen(getter)]
    pub fn max_x(&self) -> f32 { self.max_x }
    #[wasm_bindgen(getter)]
    pub fn max_y(&self) -> f32 { self.max_y }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    /// Create a world from a JSON settings document (missing keys use defaults)
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: String) -> Result<World, JsValue> {
        let mut core = WorldCore::new();
        core.load_settings_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(to_js)
    }

    pub fn get_settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_damping(&mut self, linear: f32, angular: f32) {
        self.core.set_damping(linear, angular);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        self.core.get_perf_stats()
    }

    // === BODY API ===

    /// Returns the new body id
    pub fn create_circle(&mut self, x: f32, y: f32, radius: f32, mass: f32, friction: f32, restitution: f32) -> u32 {
        self.core
            .create_circle(Vec2::new(x, y), radius, mass, friction, restitution)
            .0
    }

    /// Returns the new body id
    #[allow(clippy::too_many_arguments)]
    pub fn create_rectangle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
    ) -> u32 {
        self.core
            .create_rectangle(Vec2::new(x, y), width, height, mass, friction, restitution)
            .0
    }

    /// Rigidity defaults to 1 and elasticity to 0 (fully rigid both ways)
    pub fn create_joint(
        &mut self,
        a: u32,
        b: u32,
        rigidity: Option<f32>,
        elasticity: Option<f32>,
    ) -> Result<u32, JsValue> {
        self.core
            .create_joint(
                BodyId(a),
                BodyId(b),
                rigidity.unwrap_or(DEFAULT_RIGIDITY),
                elasticity.unwrap_or(DEFAULT_ELASTICITY),
            )
            .map(|idx| idx as u32)
            .map_err(to_js)
    }

    pub fn allow_pinned_rotation(&mut self, id: u32, mass: f32) -> Result<(), JsValue> {
        self.core.allow_pinned_rotation(BodyId(id), mass).map_err(to_js)
    }

    pub fn move_body(&mut self, id: u32, dx: f32, dy: f32) -> Result<(), JsValue> {
        self.core.move_body(BodyId(id), Vec2::new(dx, dy)).map_err(to_js)
    }

    pub fn rotate_body(&mut self, id: u32, angle: f32) -> Result<(), JsValue> {
        self.core.rotate_body(BodyId(id), angle).map_err(to_js)
    }

    pub fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) -> Result<(), JsValue> {
        self.core.set_velocity(BodyId(id), Vec2::new(vx, vy)).map_err(to_js)
    }

    pub fn set_angular_velocity(&mut self, id: u32, w: f32) -> Result<(), JsValue> {
        self.core.set_angular_velocity(BodyId(id), w).map_err(to_js)
    }

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.center().x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.center().y)
    }

    pub fn body_angle(&self, id: u32) -> Option<f32> {
        self.core.body(BodyId(id)).map(|b| b.angle())
    }

    /// JSON array of `{id, kind, x, y, angle, radius | width/height, resting_time, user_data}`
    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    /// Box enclosing every body, `undefined` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        self.core.bounds().map(|aabb| Bounds {
            min_x: aabb.min.x,
            min_y: aabb.min.y,
            max_x: aabb.max.x,
            max_y: aabb.max.y,
        })
    }

    /// Advance the simulation by `1 / fps` seconds
    pub fn step(&mut self, fps: f32) {
        self.core.step(fps);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
