//! Axis-aligned bounding-box collision
//!
//! Every entity is a rectangle in canvas pixels (origin top-left, y down).
//! Overlap uses strict inequalities: rectangles that only share an edge do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max()).all() && self.max().cmpgt(other.min).all()
    }
}

/// Anything with a bounding box
pub trait Bounds {
    fn bounds(&self) -> Aabb;
}

/// Check whether the player overlaps an obstacle
#[inline]
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    player.bounds().overlaps(&obstacle.bounds())
}
