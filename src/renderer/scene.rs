//! Scene drawing: the running playfield and the end screen

use super::{Color, Font, Surface};
use crate::config::GameConfig;
use crate::sim::{Bounds, GameState};

/// End screen text positions (canvas pixels, text baseline)
const TITLE_POS: (i32, i32) = (90, 300);
const SCORE_POS: (i32, i32) = (160, 350);

/// Clear the canvas and draw the player and every obstacle
pub fn draw_scene<S: Surface>(surface: &mut S, state: &GameState) {
    surface.clear(state.arena.bounds());
    surface.fill_rect(state.player.bounds(), Color::PLAYER);
    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.bounds(), Color::OBSTACLE);
    }
}

/// Dim the whole canvas and print the title and final score over it
pub fn draw_game_over<S: Surface>(surface: &mut S, state: &GameState, config: &GameConfig) {
    surface.fill_rect(state.arena.bounds(), Color::OVERLAY);
    surface.fill_text(
        &config.game_over_text,
        TITLE_POS.0,
        TITLE_POS.1,
        Font::TITLE,
        Color::TEXT,
    );
    surface.fill_text(
        &config.score_text(state.score),
        SCORE_POS.0,
        SCORE_POS.1,
        Font::BODY,
        Color::TEXT,
    );
}
