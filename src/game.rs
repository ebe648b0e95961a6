//! Frame scheduler
//!
//! [`Game::frame`] runs one display refresh worth of work and tells the host
//! whether to schedule another one. Once the player is hit it draws the end
//! screen and returns [`FrameOutcome::Halt`]; the host simply stops requesting frames.

use crate::config::GameConfig;
use crate::renderer::{ScoreDisplay, Surface, draw_game_over, draw_scene};
use crate::sim::{Arena, GamePhase, GameState, InputEvent, apply_input, step};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame
    Continue,
    /// The game has ended; stop scheduling
    Halt,
}

/// A running game session
pub struct Game {
    state: GameState,
    config: GameConfig,
}

impl Game {
    pub fn new(mut config: GameConfig, arena: Arena, seed: u64) -> Self {
        config.sanitize();
        Self {
            state: GameState::new(seed, arena, &config),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply a key press right away, between frames
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.state, event);
    }

    /// Run one frame: draw, update, check for a hit, maybe spawn
    pub fn frame<S, D>(&mut self, surface: &mut S, score: &mut D) -> FrameOutcome
    where
        S: Surface,
        D: ScoreDisplay,
    {
        if self.state.is_over() {
            draw_game_over(surface, &self.state, &self.config);
            return FrameOutcome::Halt;
        }

        draw_scene(surface, &self.state);
        score.set_text(&self.config.score_text(self.state.score));

        match step(&mut self.state) {
            GamePhase::Running => FrameOutcome::Continue,
            GamePhase::Ended => {
                draw_game_over(surface, &self.state, &self.config);
                FrameOutcome::Halt
            }
        }
    }
}
