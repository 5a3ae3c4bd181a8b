//! Surface friction sampling around the character's edges

use strider_core::{CollisionQuery, LayerMask, Vec2};

/// Per-axis damping gathered from surfaces in contact this tick.
///
/// Contact above or below the character damps horizontal motion; contact on
/// either side damps vertical motion. A free axis samples zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrictionSample {
    /// Damping applied to horizontal velocity, per tick
    pub horizontal_damping: f32,
    /// Damping applied to vertical velocity, per tick
    pub vertical_damping: f32,
}

impl FrictionSample {
    /// Probes small circles at the midpoints of the character's four edges
    /// and reads surface friction from whatever they touch.
    ///
    /// When both probes on an axis touch something, the first sample wins:
    /// top over bottom, left over right.
    pub fn probe(
        world: &dyn CollisionQuery,
        position: Vec2,
        half_extents: Vec2,
        radius: f32,
        mask: LayerMask,
    ) -> FrictionSample {
        let above = world.circle_probe(position + Vec2::new(0.0, half_extents.y), radius, mask);
        let below = world.circle_probe(position - Vec2::new(0.0, half_extents.y), radius, mask);
        let left = world.circle_probe(position - Vec2::new(half_extents.x, 0.0), radius, mask);
        let right = world.circle_probe(position + Vec2::new(half_extents.x, 0.0), radius, mask);

        FrictionSample {
            horizontal_damping: above.or(below).map_or(0.0, |contact| contact.friction),
            vertical_damping: left.or(right).map_or(0.0, |contact| contact.friction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{BoxCastHit, Cardinal, SurfaceContact};

    /// Query world that answers circle probes by vertical band
    struct Banded {
        /// Friction reported below y = 0
        floor_friction: Option<f32>,
        /// Friction reported at x <= -1
        wall_friction: Option<f32>,
    }

    impl CollisionQuery for Banded {
        fn box_cast(
            &self,
            _origin: Vec2,
            _half_extents: Vec2,
            _dir: Cardinal,
            _max_distance: f32,
            _mask: LayerMask,
        ) -> Vec<BoxCastHit> {
            Vec::new()
        }

        fn circle_probe(
            &self,
            center: Vec2,
            _radius: f32,
            _mask: LayerMask,
        ) -> Option<SurfaceContact> {
            if center.y < 0.0 {
                return self.floor_friction.map(|friction| SurfaceContact { friction });
            }
            if center.x <= -1.0 {
                return self.wall_friction.map(|friction| SurfaceContact { friction });
            }
            None
        }
    }

    #[test]
    fn test_free_space_samples_zero() {
        let world = Banded {
            floor_friction: None,
            wall_friction: None,
        };
        let sample = FrictionSample::probe(&world, Vec2::ZERO, Vec2::new(1.0, 0.5), 0.1, LayerMask::ALL);
        assert_eq!(sample, FrictionSample::default());
    }

    #[test]
    fn test_floor_contact_damps_horizontal_only() {
        let world = Banded {
            floor_friction: Some(0.3),
            wall_friction: None,
        };
        let sample = FrictionSample::probe(&world, Vec2::ZERO, Vec2::new(1.0, 0.5), 0.1, LayerMask::ALL);
        assert_eq!(sample.horizontal_damping, 0.3);
        assert_eq!(sample.vertical_damping, 0.0);
    }

    #[test]
    fn test_wall_contact_damps_vertical_only() {
        let world = Banded {
            floor_friction: None,
            wall_friction: Some(0.25),
        };
        let sample = FrictionSample::probe(&world, Vec2::ZERO, Vec2::new(1.0, 0.5), 0.1, LayerMask::ALL);
        assert_eq!(sample.horizontal_damping, 0.0);
        assert_eq!(sample.vertical_damping, 0.25);
    }

    /// Every probe point answers with a friction derived from its location
    struct Everywhere;

    impl CollisionQuery for Everywhere {
        fn box_cast(
            &self,
            _origin: Vec2,
            _half_extents: Vec2,
            _dir: Cardinal,
            _max_distance: f32,
            _mask: LayerMask,
        ) -> Vec<BoxCastHit> {
            Vec::new()
        }

        fn circle_probe(
            &self,
            center: Vec2,
            _radius: f32,
            _mask: LayerMask,
        ) -> Option<SurfaceContact> {
            let friction = match (center.x, center.y) {
                (x, _) if x < 0.0 => 0.5,
                (x, _) if x > 0.0 => 0.2,
                (_, y) if y > 0.0 => 0.7,
                _ => 0.3,
            };
            Some(SurfaceContact { friction })
        }
    }

    #[test]
    fn test_first_probe_of_each_pair_wins() {
        // All four probes report contact: top (0.7) outranks bottom (0.3),
        // left (0.5) outranks right (0.2).
        let sample = FrictionSample::probe(
            &Everywhere,
            Vec2::ZERO,
            Vec2::new(1.0, 0.5),
            0.1,
            LayerMask::ALL,
        );
        assert_eq!(sample.horizontal_damping, 0.7);
        assert_eq!(sample.vertical_damping, 0.5);
    }
}
