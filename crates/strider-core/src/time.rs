//! Fixed-timestep clock for host loops
//!
//! Hosts feed in raw frame deltas and drain whole fixed steps, so the
//! simulation always advances in identical increments regardless of frame
//! rate.

use serde::{Deserialize, Serialize};

/// Configuration for the step clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Fixed timestep for simulation (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Accumulates frame time and hands out whole fixed steps
#[derive(Debug, Clone)]
pub struct StepClock {
    /// Configuration
    pub config: StepConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped)
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Accumulated time for fixed timestep
    accumulator: f32,
}

impl Default for StepClock {
    fn default() -> Self {
        Self {
            config: StepConfig::default(),
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            accumulator: 0.0,
        }
    }
}

impl StepClock {
    /// Create a new clock with custom config
    pub fn new(config: StepConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Feed in the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.delta_time = raw_delta.min(self.config.max_delta_time);
        self.frame_count += 1;
        self.total_time += self.delta_time as f64;
        self.accumulator += self.delta_time;
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.accumulator >= self.config.fixed_timestep {
            self.accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        steps
    }

    /// Get the interpolation factor for rendering between fixed steps
    pub fn interpolation(&self) -> f32 {
        self.accumulator / self.config.fixed_timestep
    }
}
