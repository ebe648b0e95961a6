//! Dodge Drop - A falling-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, obstacles, collisions, spawning)
//! - `renderer`: 2D drawing surface abstraction and scene drawing
//! - `game`: Frame scheduler tying the simulation to a surface
//! - `config`: Data-driven game setup

pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use game::{FrameOutcome, Game};

/// Game configuration constants
pub mod consts {
    /// Canvas size used when the host does not provide one
    pub const DEFAULT_CANVAS_WIDTH: i32 = 400;
    pub const DEFAULT_CANVAS_HEIGHT: i32 = 600;

    /// Player defaults
    pub const PLAYER_START_X: i32 = 180;
    pub const PLAYER_START_Y: i32 = 550;
    pub const PLAYER_WIDTH: i32 = 40;
    pub const PLAYER_HEIGHT: i32 = 40;
    /// Pixels moved per key press
    pub const PLAYER_SPEED: i32 = 5;

    /// Obstacle defaults
    pub const OBSTACLE_HEIGHT: i32 = 20;
    /// Pixels fallen per frame
    pub const OBSTACLE_SPEED: i32 = 3;
    pub const OBSTACLE_MIN_WIDTH: i32 = 50;

    /// Upper bound for configured positions and sizes
    pub const MAX_EXTENT: i32 = 10_000;
    /// Upper bound for configured speeds
    pub const MAX_SPEED: i32 = 1_000;

    /// Frames between obstacle spawns
    pub const SPAWN_INTERVAL: u64 = 60;
}
