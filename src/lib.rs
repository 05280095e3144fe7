//! Impulse2D Engine - deterministic 2D rigid-body physics for WASM
//!
//! Circles and rectangles, separating-axis collision detection,
//! impulse-based response with friction and restitution, and distance
//! joints, advanced one fixed tick at a time.
//!
//! Architecture:
//! - core/        - Vector math and borrowing helpers
//! - domain/      - Bodies, shapes, joints, settings, errors
//! - systems/     - Integration, collision, resolution, joints, rest tracking
//! - simulation/  - World orchestration and the JS facade
//!
//! ```
//! use impulse2d_engine::{Vec2, WorldCore};
//!
//! let mut world = WorldCore::new();
//! world.create_rectangle(Vec2::new(0.0, 100.0), 400.0, 20.0, 0.0, 1.0, 0.0);
//! let ball = world.create_circle(Vec2::new(0.0, 0.0), 10.0, 1.0, 0.5, 0.3);
//! for _ in 0..120 {
//!     world.step(60.0);
//! }
//! assert!(world.body(ball).unwrap().center().y < 90.0);
//! ```

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Impulse2D engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Aabb, Vec2};
pub use domain::{Body, BodyId, EngineError, Joint, Shape, ShapeKind, WorldSettings};
pub use simulation::{BodySnapshot, Bounds, StepStats, World, WorldCore};
pub use systems::CollisionInfo;
