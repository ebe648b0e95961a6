//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Bounds, collides};
pub use input::{InputEvent, apply_input};
pub use spawn::Spawner;
pub use state::{Arena, GamePhase, GameState, Obstacle, Player};
pub use tick::{player_hit, step, update_obstacles};
