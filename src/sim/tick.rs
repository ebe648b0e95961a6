//! Per-frame simulation step
//!
//! Order within a frame is fixed: obstacles fall and leave, then collisions are
//! checked, then the frame counter advances and the spawner may fire.

use super::collision::collides;
use super::state::{GamePhase, GameState};

/// Move every obstacle down, then drop the ones below the canvas.
///
/// Returns how many were removed; each one adds a point.
pub fn update_obstacles(state: &mut GameState) -> u64 {
    for obstacle in &mut state.obstacles {
        obstacle.fall();
    }

    let arena = state.arena;
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_below(&arena));
    let removed = (before - state.obstacles.len()) as u64;

    state.score += removed;
    removed
}

/// True if the player overlaps any live obstacle
pub fn player_hit(state: &GameState) -> bool {
    state.obstacles.iter().any(|o| collides(&state.player, o))
}

/// Advance the game state by one frame
pub fn step(state: &mut GameState) -> GamePhase {
    if state.is_over() {
        return GamePhase::Ended;
    }

    update_obstacles(state);

    if player_hit(state) {
        state.phase = GamePhase::Ended;
        log::info!("Game over: score {} after {} frames", state.score, state.frames);
        return GamePhase::Ended;
    }

    state.frames += 1;
    if state.spawner.is_due(state.frames) {
        let obstacle = state.spawner.roll(&mut state.rng, &state.arena);
        log::debug!(
            "Spawned obstacle at x={} width={} (frame {})",
            obstacle.pos.x,
            obstacle.size.x,
            state.frames
        );
        state.obstacles.push(obstacle);
    }

    GamePhase::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Arena, Obstacle};
    use glam::IVec2;

    fn new_state() -> GameState {
        GameState::new(12345, Arena::new(400, 600), &GameConfig::default())
    }

    fn obstacle(x: i32, y: i32, w: i32) -> Obstacle {
        Obstacle::new(IVec2::new(x, y), IVec2::new(w, 20), 3)
    }

    #[test]
    fn test_empty_step_keeps_running() {
        let mut state = new_state();
        assert_eq!(update_obstacles(&mut state), 0);
        assert!(!player_hit(&state));
        assert_eq!(step(&mut state), GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_overlap_ends_game() {
        let mut state = new_state();
        state.obstacles.push(obstacle(170, 540, 60));
        assert!(player_hit(&state));

        // Falls to 543, still overlapping
        assert_eq!(step(&mut state), GamePhase::Ended);
        assert!(state.is_over());
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_obstacle_leaves_bottom() {
        let mut state = new_state();
        state.obstacles.push(obstacle(0, 590, 50));

        update_obstacles(&mut state);
        assert_eq!(state.obstacles[0].pos.y, 593);
        update_obstacles(&mut state);
        assert_eq!(state.obstacles[0].pos.y, 596);
        update_obstacles(&mut state);
        assert_eq!(state.obstacles[0].pos.y, 599);
        assert_eq!(state.score, 0);

        assert_eq!(update_obstacles(&mut state), 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 1);

        // Nothing left to remove
        assert_eq!(update_obstacles(&mut state), 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_adjacent_removals_all_counted() {
        let mut state = new_state();
        state.obstacles.push(obstacle(0, 599, 50));
        state.obstacles.push(obstacle(60, 598, 50));
        state.obstacles.push(obstacle(120, 100, 50));
        state.obstacles.push(obstacle(200, 600, 50));

        assert_eq!(update_obstacles(&mut state), 3);
        assert_eq!(state.score, 3);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos, IVec2::new(120, 103));
    }

    #[test]
    fn test_every_obstacle_falls_by_speed() {
        let mut state = new_state();
        state.obstacles.push(obstacle(0, 0, 50));
        state.obstacles.push(Obstacle::new(IVec2::new(100, 40), IVec2::new(50, 20), 7));

        for _ in 0..10 {
            let before: Vec<i32> = state.obstacles.iter().map(|o| o.pos.y).collect();
            update_obstacles(&mut state);
            for (o, y) in state.obstacles.iter().zip(before) {
                assert_eq!(o.pos.y, y + o.speed);
            }
        }
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_spawns_every_sixty_frames() {
        let mut state = new_state();
        // Park the player off to the side so nothing can hit it
        state.player.pos.y = -1000;

        let mut spawn_frames = Vec::new();
        for _ in 0..200 {
            let before = state.obstacles.len() as u64 + state.score;
            step(&mut state);
            let after = state.obstacles.len() as u64 + state.score;
            if after > before {
                spawn_frames.push(state.frames);
            }
        }
        assert_eq!(spawn_frames, vec![60, 120, 180]);
    }

    #[test]
    fn test_step_after_end_is_noop() {
        let mut state = new_state();
        state.obstacles.push(obstacle(0, 10, 50));
        state.phase = GamePhase::Ended;

        assert_eq!(step(&mut state), GamePhase::Ended);
        assert_eq!(state.obstacles[0].pos.y, 10);
        assert_eq!(state.frames, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = new_state();
        let mut b = new_state();
        a.player.pos.y = -1000;
        b.player.pos.y = -1000;
        for _ in 0..600 {
            step(&mut a);
            step(&mut b);
        }
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.score, b.score);
    }
}
