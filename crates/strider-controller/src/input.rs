//! Per-tick input and the latch hosts fill between ticks
//!
//! The controller reads input exactly once per tick through [`InputSource`]
//! and clears the edge-triggered press afterwards. Hosts that poll devices
//! faster than the fixed step accumulate events in an [`InputLatch`] so a
//! tap shorter than one step still registers.

/// Player input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Jump was pressed since the last tick (edge-triggered)
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
    /// Signed horizontal input in [-1, 1]
    pub horizontal_axis: f32,
}

/// Source of per-tick input
pub trait InputSource {
    /// Read the input for the current tick
    fn read(&self) -> InputSnapshot;

    /// Clear the edge-triggered press after the tick consumed it
    fn consume(&mut self);
}

/// Accumulates host input events between fixed ticks.
///
/// Presses latch until consumed; held state and axis are level values that
/// keep whatever the host last reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    jump_pressed: bool,
    jump_held: bool,
    horizontal_axis: f32,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a jump press edge
    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    /// Record whether jump is currently held down
    pub fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }

    /// Record the horizontal axis, clamped to [-1, 1]
    pub fn set_horizontal_axis(&mut self, axis: f32) {
        self.horizontal_axis = axis.clamp(-1.0, 1.0);
    }
}

impl InputSource for InputLatch {
    fn read(&self) -> InputSnapshot {
        InputSnapshot {
            jump_pressed: self.jump_pressed,
            jump_held: self.jump_held,
            horizontal_axis: self.horizontal_axis,
        }
    }

    fn consume(&mut self) {
        self.jump_pressed = false;
    }
}

/// A bare snapshot can stand in as a source, which keeps tests short.
impl InputSource for InputSnapshot {
    fn read(&self) -> InputSnapshot {
        *self
    }

    fn consume(&mut self) {
        self.jump_pressed = false;
    }
}
