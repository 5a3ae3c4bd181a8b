//! The simulated character body

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strider_core::Aabb;

use crate::state::State;

/// Mutable simulation state of the character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterBody {
    /// Center of the character's box
    pub position: Vec2,
    /// Velocity carried across ticks
    pub velocity: Vec2,
    /// Half-size of the character's box, fixed for the body's lifetime
    pub half_extents: Vec2,
    /// Active movement mode
    pub mode: State,
    /// Jumps left before the character must land again
    pub jumps_remaining: u32,
}

impl CharacterBody {
    /// Create a body at rest.
    ///
    /// New bodies start in `Idle`; one spawned mid-air corrects itself to
    /// `Falling` on its first tick.
    pub fn new(position: Vec2, half_extents: Vec2, max_jumps: u32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents,
            mode: State::Idle,
            jumps_remaining: max_jumps,
        }
    }

    /// The character's box at its current position
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }
}
