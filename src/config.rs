//! Game configuration
//!
//! Everything tunable about a run. Defaults reproduce the classic game; the web
//! host may override any field through a JSON `data-config` attribute on the canvas.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed (host picks one from the clock when absent)
    pub seed: Option<u64>,

    // === Player ===
    pub player_x: i32,
    pub player_y: i32,
    pub player_width: i32,
    pub player_height: i32,
    /// Pixels moved per key press
    pub player_speed: i32,

    // === Obstacles ===
    pub obstacle_height: i32,
    /// Pixels fallen per frame
    pub obstacle_speed: i32,
    pub obstacle_min_width: i32,
    /// Frames between spawns
    pub spawn_interval: u64,

    // === Text ===
    /// Prefix of the score label ("Score: 12")
    pub score_label: String,
    /// Title drawn on the end screen
    pub game_over_text: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,

            player_x: PLAYER_START_X,
            player_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,

            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            spawn_interval: SPAWN_INTERVAL,

            score_label: "Score".to_string(),
            game_over_text: "game over".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    /// Format the score label shown every frame
    pub fn score_text(&self, score: u64) -> String {
        format!("{}: {}", self.score_label, score)
    }

    /// Clamp values that would stall the simulation or overflow pixel math
    pub fn sanitize(&mut self) {
        if self.spawn_interval == 0 {
            log::warn!("spawn_interval 0 is invalid, using {}", SPAWN_INTERVAL);
            self.spawn_interval = SPAWN_INTERVAL;
        }
        clamp_field("player_x", &mut self.player_x, -MAX_EXTENT, MAX_EXTENT);
        clamp_field("player_y", &mut self.player_y, -MAX_EXTENT, MAX_EXTENT);
        clamp_field("player_width", &mut self.player_width, 1, MAX_EXTENT);
        clamp_field("player_height", &mut self.player_height, 1, MAX_EXTENT);
        clamp_field("player_speed", &mut self.player_speed, 1, MAX_SPEED);
        clamp_field("obstacle_speed", &mut self.obstacle_speed, 1, MAX_SPEED);
        clamp_field("obstacle_height", &mut self.obstacle_height, 1, MAX_EXTENT);
        clamp_field("obstacle_min_width", &mut self.obstacle_min_width, 1, MAX_EXTENT);
    }
}

fn clamp_field(name: &str, value: &mut i32, min: i32, max: i32) {
    let clamped = (*value).clamp(min, max);
    if clamped != *value {
        log::warn!("{} {} out of range, using {}", name, value, clamped);
        *value = clamped;
    }
}
