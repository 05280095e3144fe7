use wasm_bindgen::prelude::*;

/// Timings and counters of the last step (all zero while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) joints_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) rest_ms: f64,
    pub(super) body_count: u32,
    pub(super) joint_count: u32,
    pub(super) sweeps: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts_found: u32,
    pub(super) contacts_resolved: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn joints_ms(&self) -> f64 { self.joints_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn rest_ms(&self) -> f64 { self.rest_ms }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 { self.joint_count }
    /// Collision sweeps actually run (at most `collision_iterations`)
    #[wasm_bindgen(getter)]
    pub fn sweeps(&self) -> u32 { self.sweeps }
    /// Narrow-phase tests run after bounding-circle acceptance
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts_found(&self) -> u32 { self.contacts_found }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
}
