//! Geometric primitives shared across the workspace

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box described by its center and half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Create a box from its center and half-extents
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Lowest corner (min x, min y)
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    /// Highest corner (max x, max y)
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Check whether a point lies inside the box (boundary inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Check whether two boxes overlap (touching edges count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        gap.x <= reach.x && gap.y <= reach.y
    }
}

/// The four axis-aligned directions used for casts and one-way surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    Left,
    Right,
    Up,
    Down,
}

impl Cardinal {
    /// Unit vector pointing along this direction
    pub fn unit(self) -> Vec2 {
        match self {
            Cardinal::Left => Vec2::new(-1.0, 0.0),
            Cardinal::Right => Vec2::new(1.0, 0.0),
            Cardinal::Up => Vec2::new(0.0, 1.0),
            Cardinal::Down => Vec2::new(0.0, -1.0),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Cardinal {
        match self {
            Cardinal::Left => Cardinal::Right,
            Cardinal::Right => Cardinal::Left,
            Cardinal::Up => Cardinal::Down,
            Cardinal::Down => Cardinal::Up,
        }
    }

    /// Whether this direction runs along the X axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Cardinal::Left | Cardinal::Right)
    }
}
