//! Obstacle spawning
//!
//! A new obstacle appears at the top of the canvas every `interval` frames,
//! with a random width and a random horizontal position that keeps it on screen.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Arena, Obstacle};
use crate::config::GameConfig;

/// Spawn timing and obstacle shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    /// Frames between spawns
    pub interval: u64,
    pub height: i32,
    pub speed: i32,
    pub min_width: i32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Spawner {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            interval: config.spawn_interval.max(1),
            height: config.obstacle_height,
            speed: config.obstacle_speed,
            min_width: config.obstacle_min_width,
        }
    }

    /// True on every positive multiple of the interval
    #[inline]
    pub fn is_due(&self, frames: u64) -> bool {
        frames > 0 && frames % self.interval == 0
    }

    /// Roll a new obstacle at the top of the canvas.
    ///
    /// Width is drawn from `[min_width, min_width + width/2 - 1]` and x from
    /// `[0, width - obstacle_width - 1]`. Empty ranges collapse to their lower bound.
    pub fn roll<R: Rng>(&self, rng: &mut R, arena: &Arena) -> Obstacle {
        let extra = arena.width / 2;
        let width = if extra > 0 {
            self.min_width + rng.random_range(0..extra)
        } else {
            self.min_width
        };

        let span = arena.width - width;
        let x = if span > 0 { rng.random_range(0..span) } else { 0 };

        Obstacle::new(IVec2::new(x, 0), IVec2::new(width, self.height), self.speed)
    }
}
