//! Controller domain: movement tuning parameters and their validation.

use bevy::prelude::*;
use serde::Deserialize;

/// Tuning for normal movement and the dash. Fixed for the lifetime of a
/// controller; there is no runtime reconfiguration.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct MovementTuning {
    /// Walking speed, units per second.
    pub base_speed: f32,
    /// Applied to `base_speed` while sprinting.
    pub sprint_multiplier: f32,
    /// Lerp rate per second when speeding up toward the target speed.
    pub acceleration: f32,
    /// Lerp rate per second when slowing down toward the target speed.
    pub deceleration: f32,
    /// Dash velocity magnitude, units per second.
    pub dash_power: f32,
    /// How long a dash holds its velocity, seconds.
    pub dash_duration: f32,
    /// Minimum time after a dash before the next one, seconds.
    pub dash_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_speed: 240.0,
            sprint_multiplier: 1.5,
            acceleration: 6.0,
            deceleration: 8.0,
            dash_power: 900.0,
            dash_duration: 0.15,
            dash_cooldown: 1.0,
        }
    }
}

/// A tuning field that failed validation.
#[derive(Debug)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement tuning field '{}' must be a positive number, got {}",
            self.field, self.value
        )
    }
}

impl MovementTuning {
    /// Check that every parameter is positive and finite. Returns all
    /// offending fields, not just the first.
    pub fn validate(&self) -> Result<(), Vec<TuningError>> {
        let checks = [
            ("base_speed", self.base_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("dash_power", self.dash_power),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
        ];

        let errors: Vec<TuningError> = checks
            .into_iter()
            .filter(|(_, value)| !value.is_finite() || *value <= 0.0)
            .map(|(field, value)| TuningError { field, value })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
