//! Strider Core - shared vocabulary for the Strider character controller
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Mathematical primitives (re-exported from glam)
//! - Axis-aligned boxes and cardinal directions
//! - The collision query interface implemented by physics providers
//! - A fixed-timestep clock for host loops

pub mod collision;
pub mod time;
pub mod types;

pub use collision::{BoxCastHit, CollisionQuery, LayerMask, SurfaceContact};
pub use glam::Vec2;
pub use time::{StepClock, StepConfig};
pub use types::{Aabb, Cardinal};
