//! Physics step
//!
//! Ball motion is scaled by `dt`. Platform and asteroid velocities are
//! per-tick displacements, scaled only when `MotionScaling::DeltaScaled`
//! is selected.

use super::collision::past_lateral_bound;
use super::state::{Ball, GameState, Obstacle, Platform};
use crate::tuning::Tuning;

/// Gravity, steering and vertical integration for the ball
pub fn integrate_ball(ball: &mut Ball, tuning: &Tuning, dt: f32) {
    ball.vel_y -= tuning.gravity * dt;

    // Both held cancels out
    if ball.move_left {
        ball.pos.x -= tuning.ball_speed * dt;
    }
    if ball.move_right {
        ball.pos.x += tuning.ball_speed * dt;
    }

    ball.pos.y += ball.vel_y * dt;
}

/// Drift platforms and bounce them off the lateral walls
pub fn move_platforms(platforms: &mut [Platform], bound: f32, factor: f32) {
    for platform in platforms {
        platform.pos.x += platform.dx * factor;
        // Flips every tick while outside; the next move brings it back
        if past_lateral_bound(platform.pos.x, bound) {
            platform.dx = -platform.dx;
        }
    }
}

/// Drift asteroids; leaving the field is handled by the resolver
pub fn move_obstacles(obstacles: &mut [Obstacle], factor: f32) {
    for obstacle in obstacles {
        obstacle.pos += obstacle.vel * factor;
    }
}

/// Advance every entity by one step of `dt` seconds
pub fn step(state: &mut GameState, dt: f32) {
    let factor = state.settings.motion.factor(dt);
    let bound = state.tuning.platform_bound;

    integrate_ball(&mut state.ball, &state.tuning, dt);
    move_platforms(state.platforms_mut(), bound, factor);
    if state.settings.variant.has_obstacles() {
        move_obstacles(state.obstacles_mut(), factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MotionScaling, Settings};
    use glam::{Vec2, Vec3};

    fn ball() -> Ball {
        Ball::at(Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_gravity_integration() {
        let tuning = Tuning::default();
        let mut b = ball();
        integrate_ball(&mut b, &tuning, 0.1);
        assert!((b.vel_y - (-0.49)).abs() < 1e-6);
        assert!((b.pos.y - (1.0 - 0.049)).abs() < 1e-6);
        assert_eq!(b.pos.x, 0.0);
    }

    #[test]
    fn test_steering_left_right_and_cancel() {
        let tuning = Tuning::default();
        let mut b = ball();
        b.move_left = true;
        integrate_ball(&mut b, &tuning, 0.5);
        assert!((b.pos.x + 1.0).abs() < 1e-6);

        let mut b = ball();
        b.move_right = true;
        integrate_ball(&mut b, &tuning, 0.5);
        assert!((b.pos.x - 1.0).abs() < 1e-6);

        let mut b = ball();
        b.move_left = true;
        b.move_right = true;
        integrate_ball(&mut b, &tuning, 0.5);
        assert!(b.pos.x.abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_leaves_ball_alone() {
        let tuning = Tuning::default();
        let mut b = ball();
        b.vel_y = -2.0;
        b.move_left = true;
        let before = b.clone();
        integrate_ball(&mut b, &tuning, 0.0);
        assert_eq!(b, before);
    }

    #[test]
    fn test_platform_reflects_past_bound() {
        let mut platforms = vec![Platform {
            id: 1,
            pos: Vec2::new(4.99, -1.5),
            dx: 0.02,
        }];
        move_platforms(&mut platforms, 5.0, 1.0);
        assert!(platforms[0].pos.x > 5.0);
        assert_eq!(platforms[0].dx, -0.02);

        move_platforms(&mut platforms, 5.0, 1.0);
        assert!(platforms[0].pos.x <= 5.0);
        assert_eq!(platforms[0].dx, -0.02);
    }

    #[test]
    fn test_platform_motion_ignores_dt_when_per_tick() {
        let mut platforms = vec![Platform {
            id: 1,
            pos: Vec2::ZERO,
            dx: 0.01,
        }];
        move_platforms(&mut platforms, 5.0, 1.0);
        assert!((platforms[0].pos.x - 0.01).abs() < 1e-7);
    }

    #[test]
    fn test_obstacles_drift_without_reflection() {
        let mut obstacles = vec![Obstacle {
            id: 1,
            pos: Vec2::new(9.99, 0.0),
            vel: Vec2::new(0.05, -0.05),
        }];
        move_obstacles(&mut obstacles, 1.0);
        assert!((obstacles[0].pos - Vec2::new(10.04, -0.05)).length() < 1e-5);
        assert_eq!(obstacles[0].vel, Vec2::new(0.05, -0.05));
    }

    /// Running world with every platform and asteroid at the origin moving at 0.01 per tick
    fn drifting_world(motion: MotionScaling) -> GameState {
        let settings = Settings {
            motion,
            ..Default::default()
        };
        let mut state = GameState::new(3, Tuning::default(), settings);
        state.start();
        state.add_obstacle(Vec2::ZERO, Vec2::ZERO);
        for p in state.platforms_mut() {
            p.pos = Vec2::ZERO;
            p.dx = 0.01;
        }
        for o in state.obstacles_mut() {
            o.pos = Vec2::ZERO;
            o.vel = Vec2::splat(0.01);
        }
        state
    }

    #[test]
    fn test_delta_scaled_step_moves_by_dt() {
        let mut state = drifting_world(MotionScaling::DeltaScaled);

        // 0.5s at 60 ticks per second is 30 ticks worth
        step(&mut state, 0.5);
        for p in state.platforms() {
            assert!((p.pos.x - 0.3).abs() < 1e-5);
        }
        for o in state.obstacles() {
            assert!((o.pos - Vec2::splat(0.3)).length() < 1e-5);
        }

        step(&mut state, 0.0);
        for p in state.platforms() {
            assert!((p.pos.x - 0.3).abs() < 1e-5);
        }
        for o in state.obstacles() {
            assert!((o.pos - Vec2::splat(0.3)).length() < 1e-5);
        }
    }

    #[test]
    fn test_per_tick_step_ignores_dt() {
        let mut state = drifting_world(MotionScaling::PerTick);
        step(&mut state, 0.5);
        step(&mut state, 0.0);
        for p in state.platforms() {
            assert!((p.pos.x - 0.02).abs() < 1e-6);
        }
        for o in state.obstacles() {
            assert!((o.pos - Vec2::splat(0.02)).length() < 1e-6);
        }
    }
}
