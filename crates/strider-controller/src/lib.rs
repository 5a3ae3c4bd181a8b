//! Strider Controller - deterministic 2D character movement
//!
//! A fixed-timestep movement state machine: each tick probes the collision
//! world for bounds and friction, integrates velocity under the current
//! mode's rules, clamps the moved position, and selects at most one mode
//! transition. The pipeline lives behind [`machine::advance`], a pure
//! function; [`machine::CharacterController`] wraps it with input handling
//! and listener notifications.

pub mod body;
pub mod bounds;
pub mod config;
pub mod events;
pub mod friction;
pub mod input;
pub mod integrator;
pub mod machine;
pub mod state;

pub use body::CharacterBody;
pub use bounds::MovementBounds;
pub use config::{ConfigError, ControllerConfig, DEFAULT_TOLERANCE};
pub use events::{ControllerListener, ModeChange};
pub use friction::FrictionSample;
pub use input::{InputLatch, InputSnapshot, InputSource};
pub use machine::{advance, CharacterController, TickOutput};
pub use state::{AxisFreeze, State};
