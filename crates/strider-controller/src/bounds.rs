//! Per-tick movement bounds derived from collision probes

use strider_core::{Cardinal, CollisionQuery, LayerMask, Vec2};

/// How far the character's center may travel this tick on each axis.
///
/// An unobstructed direction reports an infinite bound; `clamp` then leaves
/// that side of the position untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    /// Smallest center x the character may occupy
    pub left: f32,
    /// Largest center x the character may occupy
    pub right: f32,
    /// Largest center y the character may occupy
    pub top: f32,
    /// Smallest center y the character may occupy
    pub bottom: f32,
}

impl MovementBounds {
    /// Bounds with no obstruction on any side
    pub const OPEN: MovementBounds = MovementBounds {
        left: f32::NEG_INFINITY,
        right: f32::INFINITY,
        top: f32::INFINITY,
        bottom: f32::NEG_INFINITY,
    };

    /// Casts the character's box one half-extent outward in each cardinal
    /// direction and converts the nearest admissible surface into a center
    /// bound for that side.
    ///
    /// A hit is admissible when its contact point lies at or beyond the
    /// current footprint edge (within `tolerance`). Surfaces already
    /// overlapping the footprint are ignored, which is what lets the
    /// character finish passing through a one-way platform it is inside of.
    pub fn probe(
        world: &dyn CollisionQuery,
        position: Vec2,
        half_extents: Vec2,
        mask: LayerMask,
        tolerance: f32,
    ) -> MovementBounds {
        let mut bounds = MovementBounds::OPEN;

        for dir in [Cardinal::Left, Cardinal::Right, Cardinal::Down, Cardinal::Up] {
            let reach = match dir {
                Cardinal::Left | Cardinal::Right => half_extents.x,
                Cardinal::Down | Cardinal::Up => half_extents.y,
            };
            let hits = world.box_cast(position, half_extents, dir, reach, mask);
            for hit in &hits {
                match dir {
                    Cardinal::Left => {
                        if hit.point.x <= position.x - half_extents.x + tolerance {
                            bounds.left = hit.point.x + half_extents.x;
                            break;
                        }
                    }
                    Cardinal::Right => {
                        if hit.point.x >= position.x + half_extents.x - tolerance {
                            bounds.right = hit.point.x - half_extents.x;
                            break;
                        }
                    }
                    Cardinal::Down => {
                        if hit.point.y <= position.y - half_extents.y + tolerance {
                            bounds.bottom = hit.point.y + half_extents.y;
                            break;
                        }
                    }
                    Cardinal::Up => {
                        if hit.point.y >= position.y + half_extents.y - tolerance {
                            bounds.top = hit.point.y - half_extents.y;
                            break;
                        }
                    }
                }
            }
        }

        bounds
    }

    /// Clamps a candidate center position into these bounds
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.left).min(self.right),
            point.y.max(self.bottom).min(self.top),
        )
    }

    /// Whether the center rests against the left bound
    pub fn touches_left(&self, position: Vec2, tolerance: f32) -> bool {
        (position.x - self.left).abs() <= tolerance
    }

    /// Whether the center rests against the right bound
    pub fn touches_right(&self, position: Vec2, tolerance: f32) -> bool {
        (position.x - self.right).abs() <= tolerance
    }

    /// Whether the center rests against the top bound
    pub fn touches_top(&self, position: Vec2, tolerance: f32) -> bool {
        (position.y - self.top).abs() <= tolerance
    }

    /// Whether the center rests against the bottom bound
    pub fn touches_bottom(&self, position: Vec2, tolerance: f32) -> bool {
        (position.y - self.bottom).abs() <= tolerance
    }
}
