//! Collision query interface
//!
//! The controller never talks to a physics engine directly; it consumes
//! collision data through [`CollisionQuery`]. The `strider-physics` crate
//! provides the rapier-backed implementation and unit tests substitute small
//! hand-rolled worlds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Cardinal;

/// Bitmask selecting which collision layers a query can see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing
    pub const NONE: LayerMask = LayerMask(0);
    /// Ordinary solid geometry
    pub const SOLID: LayerMask = LayerMask(1 << 0);
    /// One-way platforms
    pub const PLATFORM: LayerMask = LayerMask(1 << 1);
    /// Matches every layer
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Whether the two masks share at least one layer
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

/// A single box-cast obstruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCastHit {
    /// Contact point on the obstacle face the cast ran into
    pub point: Vec2,
    /// Travel distance from the cast origin to first contact; zero when the
    /// surface is already flush with the box
    pub distance: f32,
}

/// Surface touched by a circle probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    /// Friction coefficient of the touched surface
    pub friction: f32,
}

/// Collision queries the controller needs from its environment.
///
/// Implementations must order box-cast hits nearest-first, and must not
/// report surfaces that are merely flush with the moving box along the
/// perpendicular axis: a box sliding along the ground does not "hit" the
/// ground when cast sideways.
pub trait CollisionQuery {
    /// Sweep an axis-aligned box of `half_extents` from `origin` along `dir`
    /// for up to `max_distance`, returning every obstruction on the given
    /// layers, nearest first.
    fn box_cast(
        &self,
        origin: Vec2,
        half_extents: Vec2,
        dir: Cardinal,
        max_distance: f32,
        mask: LayerMask,
    ) -> Vec<BoxCastHit>;

    /// Test a circle against the world, returning the friction of an
    /// overlapped surface on the given layers, if any.
    fn circle_probe(&self, center: Vec2, radius: f32, mask: LayerMask) -> Option<SurfaceContact>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_mask_intersects() {
        assert!(LayerMask::SOLID.intersects(LayerMask::ALL));
        assert!(!LayerMask::SOLID.intersects(LayerMask::PLATFORM));
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
    }

    #[test]
    fn test_layer_mask_union() {
        let both = LayerMask::SOLID | LayerMask::PLATFORM;
        assert!(both.intersects(LayerMask::SOLID));
        assert!(both.intersects(LayerMask::PLATFORM));
        assert_eq!(both.0, 0b11);
    }
}
