//! Mode change notifications

use crate::state::State;

/// A single mode transition, reported in the order it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    /// Mode the character left
    pub previous: State,
    /// Mode the character entered
    pub current: State,
}

/// Observer of controller activity.
///
/// Listeners run on the controller's thread in subscription order. Every
/// transition in a tick is reported through `mode_changed` before the tick's
/// single `mode_ticked` call.
pub trait ControllerListener {
    /// Called once per transition, after the new mode's entry effects ran
    fn mode_changed(&mut self, _change: ModeChange) {}

    /// Called once per tick with the mode the tick settled on
    fn mode_ticked(&mut self, _mode: State) {}
}

/// Plain closures observe mode changes without a named listener type
impl<F> ControllerListener for F
where
    F: FnMut(ModeChange),
{
    fn mode_changed(&mut self, change: ModeChange) {
        self(change);
    }
}
