//! Keyboard input
//!
//! Each key press moves the player once; there is no hold or key-up handling.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// A discrete directional key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Left,
    Right,
}

impl InputEvent {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(InputEvent::Left),
            "ArrowRight" => Some(InputEvent::Right),
            _ => None,
        }
    }
}

/// Apply a key press to the player immediately.
///
/// Ignored once the game has ended so the final state stays frozen.
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    if state.is_over() {
        return;
    }

    match event {
        InputEvent::Left => state.player.move_left(),
        InputEvent::Right => state.player.move_right(state.arena.width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Arena, GamePhase};
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(1, Arena::new(400, 600), &GameConfig::default())
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(InputEvent::from_key("ArrowLeft"), Some(InputEvent::Left));
        assert_eq!(InputEvent::from_key("ArrowRight"), Some(InputEvent::Right));
        assert_eq!(InputEvent::from_key("ArrowUp"), None);
        assert_eq!(InputEvent::from_key("a"), None);
        assert_eq!(InputEvent::from_key(" "), None);
    }

    #[test]
    fn test_moves_by_speed() {
        let mut state = new_state();
        apply_input(&mut state, InputEvent::Left);
        assert_eq!(state.player.pos.x, 175);
        apply_input(&mut state, InputEvent::Right);
        apply_input(&mut state, InputEvent::Right);
        assert_eq!(state.player.pos.x, 185);
        assert_eq!(state.player.pos.y, 550);
    }

    #[test]
    fn test_walls_stop_player() {
        let mut state = new_state();
        for _ in 0..100 {
            apply_input(&mut state, InputEvent::Left);
        }
        assert_eq!(state.player.pos.x, 0);

        for _ in 0..100 {
            apply_input(&mut state, InputEvent::Right);
        }
        assert_eq!(state.player.pos.x, 360);
    }

    #[test]
    fn test_ignored_after_game_over() {
        let mut state = new_state();
        state.phase = GamePhase::Ended;
        apply_input(&mut state, InputEvent::Left);
        assert_eq!(state.player.pos.x, 180);
    }

    proptest! {
        #[test]
        fn prop_player_stays_near_canvas(
            start in 0i32..=360,
            speed in 1i32..20,
            moves in proptest::collection::vec(any::<bool>(), 0..300),
        ) {
            let config = GameConfig {
                player_x: start,
                player_speed: speed,
                ..GameConfig::default()
            };
            let mut state = GameState::new(1, Arena::new(400, 600), &config);
            let width = state.player.size.x;

            for right in moves {
                let event = if right { InputEvent::Right } else { InputEvent::Left };
                apply_input(&mut state, event);
                let x = state.player.pos.x;
                prop_assert!(x >= -(speed - 1));
                prop_assert!(x <= 400 - width + (speed - 1));
            }
        }
    }
}
