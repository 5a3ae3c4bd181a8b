//! Controller tuning

use serde::{Deserialize, Serialize};
use strider_core::LayerMask;
use thiserror::Error;

/// Comparison tolerance for bound contact and near-zero velocity checks
pub const DEFAULT_TOLERANCE: f32 = 1.0e-3;

/// Tuning for the character controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Top horizontal speed in units per second
    pub horizontal_speed: f32,
    /// Baseline per-step horizontal deceleration, applied even on
    /// frictionless surfaces
    pub horizontal_resistance: f32,
    /// Launch speed for a tapped jump
    pub low_jump_speed: f32,
    /// Launch speed for a held jump
    pub high_jump_speed: f32,
    /// Gravity acceleration in units per second squared (negative = down)
    pub gravity_accel: f32,
    /// Most negative vertical velocity gravity can produce
    pub terminal_velocity: f32,
    /// Vertical velocity floor while wall-sliding (negative = down)
    pub wall_slide_speed: f32,
    /// Seconds a wall-stick hold must persist before it is honored;
    /// reserved until the wall-stick trigger is wired up
    pub wall_stick_delay: f32,
    /// Jumps available between landings
    pub max_jumps: u32,
    /// Comparison tolerance for contact and stillness checks
    pub tolerance: f32,
    /// Radius of the friction adjacency probes
    pub friction_probe_radius: f32,
    /// Layers the controller collides with
    pub collision_mask: LayerMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: 7.0,
            horizontal_resistance: 0.02,
            low_jump_speed: 10.0,
            high_jump_speed: 15.0,
            gravity_accel: -40.0,
            terminal_velocity: -20.0,
            wall_slide_speed: -2.0,
            wall_stick_delay: 0.2,
            max_jumps: 2,
            tolerance: DEFAULT_TOLERANCE,
            friction_probe_radius: 0.1,
            collision_mask: LayerMask::ALL,
        }
    }
}

impl ControllerConfig {
    /// Check the tuning for values the tick cannot make sense of.
    ///
    /// Validation is advisory: the tick itself never fails, but hosts that
    /// load tuning from files should call this before use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("horizontal_speed", self.horizontal_speed),
            ("horizontal_resistance", self.horizontal_resistance),
            ("low_jump_speed", self.low_jump_speed),
            ("high_jump_speed", self.high_jump_speed),
            ("gravity_accel", self.gravity_accel),
            ("terminal_velocity", self.terminal_velocity),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_stick_delay", self.wall_stick_delay),
            ("tolerance", self.tolerance),
            ("friction_probe_radius", self.friction_probe_radius),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(field));
            }
        }

        let positive = [
            ("horizontal_speed", self.horizontal_speed),
            ("low_jump_speed", self.low_jump_speed),
            ("high_jump_speed", self.high_jump_speed),
            ("tolerance", self.tolerance),
            ("friction_probe_radius", self.friction_probe_radius),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive(field));
            }
        }

        for (field, value) in [
            ("horizontal_resistance", self.horizontal_resistance),
            ("wall_stick_delay", self.wall_stick_delay),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative(field));
            }
        }

        for (field, value) in [
            ("gravity_accel", self.gravity_accel),
            ("terminal_velocity", self.terminal_velocity),
        ] {
            if value >= 0.0 {
                return Err(ConfigError::NotDownward(field));
            }
        }
        if self.wall_slide_speed > 0.0 {
            return Err(ConfigError::NotDownward("wall_slide_speed"));
        }

        Ok(())
    }
}

/// Errors reported by [`ControllerConfig::validate`]
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),

    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),

    #[error("`{0}` must be zero or greater")]
    Negative(&'static str),

    #[error("`{0}` must point downward")]
    NotDownward(&'static str),
}
