//! Movement modes and their per-tick integration rules

use std::fmt;

use serde::{Deserialize, Serialize};

/// Movement mode of the character.
///
/// `Walking`, `WallStick`, and `WallJump` are reserved extension points: a
/// host can force them and their hooks run, but no transition predicate
/// selects them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// At rest on the ground
    Idle,
    /// Reserved slower ground movement
    Walking,
    /// Moving along the ground
    Running,
    /// Airborne and descending, or capped against a ceiling
    Falling,
    /// Airborne after a jump launch
    Jumping,
    /// Sliding down a wall
    WallSlide,
    /// Reserved wall hold
    WallStick,
    /// Reserved wall launch
    WallJump,
    /// Leaving a wall slide under player input; hands off to `Falling`
    /// within the same tick
    WallDismount,
}

/// Which velocity axes a mode pins during integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFreeze {
    pub horizontal: bool,
    pub vertical: bool,
}

impl State {
    /// Velocity axes this mode holds constant while active
    pub fn freezes(self) -> AxisFreeze {
        match self {
            State::Idle | State::WallStick => AxisFreeze {
                horizontal: true,
                vertical: true,
            },
            State::Walking | State::Running => AxisFreeze {
                horizontal: false,
                vertical: true,
            },
            State::WallSlide => AxisFreeze {
                horizontal: true,
                vertical: false,
            },
            State::Falling | State::Jumping | State::WallJump | State::WallDismount => AxisFreeze {
                horizontal: false,
                vertical: false,
            },
        }
    }

    /// Whether this mode rests on the ground
    pub fn is_grounded(self) -> bool {
        matches!(self, State::Idle | State::Walking | State::Running)
    }

    /// Whether this mode is in the air
    pub fn is_airborne(self) -> bool {
        matches!(
            self,
            State::Falling | State::Jumping | State::WallJump | State::WallDismount
        )
    }

    /// Whether this mode holds wall contact
    pub fn is_on_wall(self) -> bool {
        matches!(self, State::WallSlide | State::WallStick)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Idle => "Idle",
            State::Walking => "Walking",
            State::Running => "Running",
            State::Falling => "Falling",
            State::Jumping => "Jumping",
            State::WallSlide => "WallSlide",
            State::WallStick => "WallStick",
            State::WallJump => "WallJump",
            State::WallDismount => "WallDismount",
        };
        f.write_str(name)
    }
}
