//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; the frame loop and the input
//! handler only ever touch it through `&mut GameState`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounds};
use super::spawn::Spawner;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Obstacles fall, input moves the player
    Running,
    /// Player was hit; terminal
    Ended,
}

/// Canvas dimensions, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whole-canvas rectangle
    pub fn bounds(&self) -> Aabb {
        Aabb::new(IVec2::ZERO, IVec2::new(self.width, self.height))
    }
}

impl Default for Arena {
    fn default() -> Self {
        use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

/// The player's rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Pixels moved per key press
    pub speed: i32,
}

impl Player {
    pub fn new(pos: IVec2, size: IVec2, speed: i32) -> Self {
        Self { pos, size, speed }
    }

    /// Step left if the left edge is still inside the canvas.
    ///
    /// The check happens before the move, so the player may end up to
    /// `speed - 1` pixels past the edge.
    pub fn move_left(&mut self) {
        if self.pos.x > 0 {
            self.pos.x -= self.speed;
        }
    }

    /// Step right if the right edge is still inside the canvas (same pre-move check)
    pub fn move_right(&mut self, arena_width: i32) {
        if self.pos.x + self.size.x < arena_width {
            self.pos.x += self.speed;
        }
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Pixels fallen per frame
    pub speed: i32,
}

impl Obstacle {
    pub fn new(pos: IVec2, size: IVec2, speed: i32) -> Self {
        Self { pos, size, speed }
    }

    /// Advance one frame
    #[inline]
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the top edge has passed the bottom of the canvas
    #[inline]
    pub fn is_below(&self, arena: &Arena) -> bool {
        self.pos.y > arena.height
    }
}

impl Bounds for Obstacle {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle RNG, seeded from `seed`
    pub rng: Pcg32,
    pub arena: Arena,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacles that fell off the bottom
    pub score: u64,
    /// Completed frames (spawn timing only)
    pub frames: u64,
    pub phase: GamePhase,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a fresh run on the given canvas
    pub fn new(seed: u64, arena: Arena, config: &GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            player: Player::new(
                IVec2::new(config.player_x, config.player_y),
                IVec2::new(config.player_width, config.player_height),
                config.player_speed,
            ),
            obstacles: Vec::new(),
            score: 0,
            frames: 0,
            phase: GamePhase::Running,
            spawner: Spawner::from_config(config),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}
