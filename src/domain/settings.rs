use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::EngineError;

/// Default world gravity (y grows downward)
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 100.0);
pub const DEFAULT_DAMPING: f32 = 0.98;
pub const DEFAULT_ANGULAR_DAMPING: f32 = 0.98;
/// Ceiling on collision sweeps per step
pub const DEFAULT_COLLISION_ITERATIONS: u32 = 9;
/// Fraction of the penetration depth removed per resolved contact
pub const DEFAULT_POSITIONAL_CORRECTION: f32 = 0.8;
/// Added to a joint's rest length so its ends don't start in contact
pub const DEFAULT_JOINT_MARGIN: f32 = 0.5;

/// Tunable world parameters.
///
/// Missing JSON keys fall back to the defaults, so a host can ship a
/// partial settings file such as `{"gravity": {"x": 0, "y": 0}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub gravity: Vec2,
    pub damping: f32,
    pub angular_damping: f32,
    pub collision_iterations: u32,
    pub positional_correction: f32,
    pub joint_margin: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            collision_iterations: DEFAULT_COLLISION_ITERATIONS,
            positional_correction: DEFAULT_POSITIONAL_CORRECTION,
            joint_margin: DEFAULT_JOINT_MARGIN,
        }
    }
}

impl WorldSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidSettings(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let s = WorldSettings::from_json(r#"{"gravity": {"x": 0.0, "y": 0.0}}"#).unwrap();
        assert_eq!(s.gravity, Vec2::ZERO);
        assert_eq!(s.damping, DEFAULT_DAMPING);
        assert_eq!(s.collision_iterations, 9);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = WorldSettings::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings(_)));
    }

    #[test]
    fn json_round_trips_defaults() {
        let s = WorldSettings::default();
        assert_eq!(WorldSettings::from_json(&s.to_json()).unwrap(), s);
    }
}
