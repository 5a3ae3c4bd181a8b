//! Strider Physics - static collision world using rapier2d
//!
//! Provides the collision query implementation the controller consumes:
//! axis-aligned box casts with one-way surface support, and circle probes
//! that report surface friction.

mod surface;

pub use surface::Surface;

use std::collections::HashMap;

use glam::Vec2;
use nalgebra::Isometry2;
use rapier2d::prelude::*;

use strider_core::{Aabb, BoxCastHit, Cardinal, CollisionQuery, LayerMask, SurfaceContact};

/// A world of static axis-aligned colliders
pub struct CollisionWorld {
    /// Collider storage
    pub collider_set: ColliderSet,
    /// Rigid body storage; stays empty, rapier queries require it
    rigid_body_set: RigidBodySet,
    /// Query pipeline for shape intersection tests
    query_pipeline: QueryPipeline,
    /// Island manager needed for collider removal
    island_manager: IslandManager,
    /// Obstruction side for one-way colliders
    one_way: HashMap<ColliderHandle, Cardinal>,
}

impl CollisionWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            collider_set: ColliderSet::new(),
            rigid_body_set: RigidBodySet::new(),
            query_pipeline: QueryPipeline::new(),
            island_manager: IslandManager::new(),
            one_way: HashMap::new(),
        }
    }

    /// Add a static box collider described by a surface
    pub fn add_box(&mut self, bounds: Aabb, surface: Surface) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(bounds.half_extents.x, bounds.half_extents.y)
            .translation(vector![bounds.center.x, bounds.center.y])
            .friction(surface.friction)
            .collision_groups(InteractionGroups::new(
                Group::from_bits_truncate(surface.layers.0),
                Group::ALL,
            ))
            .build();

        let handle = self.collider_set.insert(collider);
        if let Some(side) = surface.solid_from {
            self.one_way.insert(handle, side);
        }
        self.query_pipeline.update(&self.collider_set);
        handle
    }

    /// Remove a collider
    pub fn remove(&mut self, handle: ColliderHandle) {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, false);
        self.one_way.remove(&handle);
        self.query_pipeline.update(&self.collider_set);
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Number of colliders in the world
    pub fn len(&self) -> usize {
        self.collider_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collider_set.is_empty()
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionQuery for CollisionWorld {
    /// Cardinal sweeps of axis-aligned boxes are resolved analytically
    /// against the stored cuboids. The cast contract needs exact flush and
    /// graze classification, which a time-of-impact shape cast would bury
    /// under its own tolerances.
    fn box_cast(
        &self,
        origin: Vec2,
        half_extents: Vec2,
        dir: Cardinal,
        max_distance: f32,
        mask: LayerMask,
    ) -> Vec<BoxCastHit> {
        let moving = Aabb::new(origin, half_extents);
        let mut hits = Vec::new();

        for (handle, collider) in self.collider_set.iter() {
            if collider.collision_groups().memberships.bits() & mask.0 == 0 {
                continue;
            }
            if let Some(&side) = self.one_way.get(&handle) {
                if dir != side.opposite() {
                    continue;
                }
            }
            let Some(cuboid) = collider.shape().as_cuboid() else {
                continue;
            };
            let obstacle = Aabb::new(
                Vec2::new(collider.translation().x, collider.translation().y),
                Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y),
            );

            let hit = if dir.is_horizontal() {
                // Perpendicular spans must genuinely overlap; flush edges
                // are a graze, not an obstruction.
                let overlap_min = moving.min().y.max(obstacle.min().y);
                let overlap_max = moving.max().y.min(obstacle.max().y);
                if overlap_max <= overlap_min {
                    continue;
                }
                let (leading, face) = if dir == Cardinal::Right {
                    (moving.max().x, obstacle.min().x)
                } else {
                    (moving.min().x, obstacle.max().x)
                };
                let gap = (face - leading) * dir.unit().x;
                // A cast that starts past the far face has already passed
                // the obstacle.
                if gap > max_distance || gap < -2.0 * obstacle.half_extents.x {
                    continue;
                }
                BoxCastHit {
                    point: Vec2::new(face, (overlap_min + overlap_max) * 0.5),
                    distance: gap.max(0.0),
                }
            } else {
                let overlap_min = moving.min().x.max(obstacle.min().x);
                let overlap_max = moving.max().x.min(obstacle.max().x);
                if overlap_max <= overlap_min {
                    continue;
                }
                let (leading, face) = if dir == Cardinal::Up {
                    (moving.max().y, obstacle.min().y)
                } else {
                    (moving.min().y, obstacle.max().y)
                };
                let gap = (face - leading) * dir.unit().y;
                if gap > max_distance || gap < -2.0 * obstacle.half_extents.y {
                    continue;
                }
                BoxCastHit {
                    point: Vec2::new((overlap_min + overlap_max) * 0.5, face),
                    distance: gap.max(0.0),
                }
            };
            hits.push(hit);
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn circle_probe(&self, center: Vec2, radius: f32, mask: LayerMask) -> Option<SurfaceContact> {
        let groups = InteractionGroups::new(Group::ALL, Group::from_bits_truncate(mask.0));
        let shape_pos = Isometry2::translation(center.x, center.y);

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &Ball::new(radius),
                QueryFilter::default().groups(groups),
            )
            .and_then(|handle| self.collider_set.get(handle))
            .map(|collider| SurfaceContact {
                friction: collider.friction(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        world.add_box(
            Aabb::new(Vec2::new(0.0, -0.5), Vec2::new(10.0, 0.5)),
            Surface::solid(0.4),
        );
        world
    }

    #[test]
    fn test_world_creation() {
        let world = CollisionWorld::new();
        assert!(world.is_empty());
    }

    #[test]
    fn test_box_cast_down_hits_ground() {
        let world = ground_world();
        let hits = world.box_cast(
            Vec2::new(0.0, 0.8),
            Vec2::new(0.5, 0.5),
            Cardinal::Down,
            0.5,
            LayerMask::ALL,
        );
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 0.3).abs() < 1.0e-6);
        assert!(hits[0].point.y.abs() < 1.0e-6);
    }

    #[test]
    fn test_box_cast_flush_reports_zero() {
        let world = ground_world();
        let hits = world.box_cast(
            Vec2::new(0.0, 0.5),
            Vec2::new(0.5, 0.5),
            Cardinal::Down,
            0.5,
            LayerMask::ALL,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].distance, 0.0);
    }

    #[test]
    fn test_box_cast_ignores_perpendicular_graze() {
        // Standing flush on the ground, a sideways cast must not treat the
        // floor as an obstruction.
        let world = ground_world();
        let hits = world.box_cast(
            Vec2::new(0.0, 0.5),
            Vec2::new(0.5, 0.5),
            Cardinal::Right,
            0.5,
            LayerMask::ALL,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_box_cast_out_of_range() {
        let world = ground_world();
        let hits = world.box_cast(
            Vec2::new(0.0, 3.0),
            Vec2::new(0.5, 0.5),
            Cardinal::Down,
            0.5,
            LayerMask::ALL,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_box_cast_respects_mask() {
        let mut world = CollisionWorld::new();
        world.add_box(
            Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(0.5, 2.0)),
            Surface::solid(0.4),
        );
        let origin = Vec2::ZERO;
        let extents = Vec2::new(0.5, 0.5);

        let masked = world.box_cast(origin, extents, Cardinal::Right, 2.0, LayerMask::PLATFORM);
        assert!(masked.is_empty());

        let solid = world.box_cast(origin, extents, Cardinal::Right, 2.0, LayerMask::SOLID);
        assert_eq!(solid.len(), 1);
        assert!((solid[0].distance - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn test_one_way_blocks_only_from_its_side() {
        let mut world = CollisionWorld::new();
        world.add_box(
            Aabb::new(Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.25)),
            Surface::one_way(0.6, Cardinal::Up),
        );

        // Falling onto the top face is obstructed
        let down = world.box_cast(
            Vec2::new(0.0, 3.0),
            Vec2::new(0.5, 0.5),
            Cardinal::Down,
            0.5,
            LayerMask::ALL,
        );
        assert_eq!(down.len(), 1);

        // Rising through it from below is not
        let up = world.box_cast(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
            Cardinal::Up,
            0.5,
            LayerMask::ALL,
        );
        assert!(up.is_empty());
    }

    #[test]
    fn test_box_cast_orders_nearest_first() {
        let mut world = CollisionWorld::new();
        world.add_box(
            Aabb::new(Vec2::new(3.0, 0.0), Vec2::new(0.5, 1.0)),
            Surface::solid(0.1),
        );
        world.add_box(
            Aabb::new(Vec2::new(1.5, 0.0), Vec2::new(0.5, 1.0)),
            Surface::solid(0.2),
        );

        let hits = world.box_cast(
            Vec2::ZERO,
            Vec2::new(0.5, 0.5),
            Cardinal::Right,
            5.0,
            LayerMask::ALL,
        );
        assert_eq!(hits.len(), 2);
        assert!(hits[0].distance < hits[1].distance);
        assert!((hits[0].point.x - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn test_circle_probe_reads_friction() {
        let world = ground_world();

        let contact = world.circle_probe(Vec2::new(0.0, 0.05), 0.1, LayerMask::ALL);
        assert!((contact.unwrap().friction - 0.4).abs() < 1.0e-6);

        let miss = world.circle_probe(Vec2::new(0.0, 5.0), 0.1, LayerMask::ALL);
        assert!(miss.is_none());
    }

    #[test]
    fn test_circle_probe_respects_mask() {
        let world = ground_world();
        let miss = world.circle_probe(Vec2::new(0.0, 0.05), 0.1, LayerMask::PLATFORM);
        assert!(miss.is_none());
    }

    #[test]
    fn test_remove_clears_collider() {
        let mut world = CollisionWorld::new();
        let handle = world.add_box(Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0)), Surface::solid(0.4));
        assert_eq!(world.len(), 1);

        world.remove(handle);
        assert!(world.is_empty());

        let hits = world.box_cast(
            Vec2::new(0.0, 3.0),
            Vec2::new(0.5, 0.5),
            Cardinal::Down,
            10.0,
            LayerMask::ALL,
        );
        assert!(hits.is_empty());
    }
}
