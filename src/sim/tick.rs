//! Simulation tick
//!
//! One call advances the world by one frame: physics, collision
//! resolution, then the fall-through check.

use super::collision::fell_through;
use super::physics;
use super::resolve;
use super::state::{GameEvent, GamePhase, GameState};

/// Horizontal control directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a key name to a direction (`ArrowLeft`, `Left`, `a`, ...)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" | "left" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "Right" | "right" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held left
    pub move_left: bool,
    /// Held right
    pub move_right: bool,
    /// Start signal (only read while not started)
    pub start: bool,
}

impl TickInput {
    pub fn key_down(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left = true,
            Direction::Right => self.move_right = true,
        }
    }

    pub fn key_up(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left = false,
            Direction::Right => self.move_right = false,
        }
    }
}

/// Advance the game state by `dt` seconds
///
/// `dt` is not clamped. A negative or non-finite `dt` is treated as zero.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.clear_events();

    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.start();
            }
            return;
        }
        // Only reachable if a caller stopped mid-transition
        GamePhase::GameOver => state.reset(),
        GamePhase::Running => {}
    }

    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    state.time_ticks += 1;
    state.ball.move_left = input.move_left;
    state.ball.move_right = input.move_right;

    physics::step(state, dt);
    resolve::resolve(state);

    if fell_through(state.ball.pos.y, state.tuning.fall_limit) {
        game_over(state);
    }

    log::trace!(
        "tick {}: ball=({:.2}, {:.2}) vy={:.2} score={} asteroids={}",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel_y,
        state.score,
        state.obstacles().len()
    );
}

/// Running -> GameOver -> Running. The notification goes out first.
fn game_over(state: &mut GameState) {
    let score = state.score;
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver { score });
    log::info!("Game over! Final score: {}", score);
    state.reset();
}
