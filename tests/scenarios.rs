use glam::{Vec2, Vec3};

use star_bounce::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use star_bounce::{Settings, Tuning, Variant};

fn started(seed: u64, settings: Settings) -> GameState {
    let mut state = GameState::new(seed, Tuning::default(), settings);
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, 0.0);
    state.drain_events().for_each(drop);
    state
}

fn classic() -> Settings {
    Settings {
        variant: Variant::Classic,
        ..Default::default()
    }
}

/// Park every asteroid high above the platforms, motionless
fn park_obstacles(state: &mut GameState) {
    for (i, o) in state.obstacles_mut().iter_mut().enumerate() {
        o.pos = Vec2::new(-8.0 + i as f32, 8.0);
        o.vel = Vec2::ZERO;
    }
}

#[test]
fn ball_lands_on_platform() {
    let mut state = started(1, classic());
    {
        let platforms = state.platforms_mut();
        platforms[0].pos = Vec2::ZERO;
        platforms[0].dx = 0.0;
        for p in platforms.iter_mut().skip(1) {
            p.pos.y = -4.0;
        }
    }
    state.ball.pos = Vec3::new(0.0, 0.05, 0.0);
    state.ball.vel_y = -1.0;

    tick(&mut state, &TickInput::default(), 0.1);

    assert_eq!(state.score(), 1);
    assert!((state.ball.pos.y - 0.2).abs() < 1e-6);
    assert_eq!(state.ball.vel_y, state.bounce_velocity());
    assert!(state.bounce_velocity() > 0.0);
}

#[test]
fn rising_ball_passes_through_platform() {
    let mut state = started(1, classic());
    {
        let platforms = state.platforms_mut();
        platforms[0].pos = Vec2::ZERO;
        platforms[0].dx = 0.0;
        for p in platforms.iter_mut().skip(1) {
            p.pos.y = -4.0;
        }
    }
    state.ball.pos = Vec3::new(0.0, -0.05, 0.0);
    state.ball.vel_y = 2.0;

    tick(&mut state, &TickInput::default(), 0.01);

    assert_eq!(state.score(), 0);
    assert!(state.ball.vel_y < 2.0);
    assert!(state.ball.vel_y > 0.0);
}

#[test]
fn asteroid_leaving_field_is_replaced_once() {
    let mut state = started(2, Settings::default());
    park_obstacles(&mut state);
    while state.obstacles().len() < 5 {
        state.add_obstacle(Vec2::new(0.0, 9.0), Vec2::ZERO);
    }
    let leaving = state.add_obstacle(Vec2::new(10.5, 0.0), Vec2::ZERO);
    let before = state.obstacles().len();
    state.drain_events().for_each(drop);

    tick(&mut state, &TickInput::default(), 1.0 / 60.0);

    assert!(state.obstacle(leaving).is_none());
    assert_eq!(state.obstacles().len(), before);
    let events: Vec<_> = state.drain_events().collect();
    let spawned = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ObstacleSpawned(_)))
        .count();
    assert_eq!(spawned, 1);
    assert!(events.contains(&GameEvent::ObstacleDespawned(leaving)));
}

#[test]
fn asteroid_destroys_platform_and_both_are_replaced() {
    let mut state = started(3, Settings::default());
    park_obstacles(&mut state);
    while state.obstacles().len() < 5 {
        state.add_obstacle(Vec2::new(0.0, 9.0), Vec2::ZERO);
    }
    let target = {
        let p = &mut state.platforms_mut()[2];
        p.dx = 0.0;
        p.id
    };
    let target_pos = state.platform(target).unwrap().pos;
    let rock = state.add_obstacle(target_pos, Vec2::ZERO);
    let obstacles_before = state.obstacles().len();
    state.drain_events().for_each(drop);

    tick(&mut state, &TickInput::default(), 1.0 / 60.0);

    assert!(state.platform(target).is_none());
    assert!(state.obstacle(rock).is_none());
    assert_eq!(state.platforms().len(), 5);
    assert_eq!(state.obstacles().len(), obstacles_before);
    let events: Vec<_> = state.drain_events().collect();
    let new_platforms: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::PlatformSpawned(id) => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(new_platforms.len(), 1);
    assert_eq!(state.platform(new_platforms[0]).unwrap().pos.y, -1.5);
}

#[test]
fn fall_through_resets_run() {
    let mut state = started(4, Settings::default());
    for p in state.platforms_mut() {
        p.pos.y = 1.0;
    }
    state.score = 9;
    state.ball.pos = Vec3::new(0.0, -6.0, 0.0);

    tick(&mut state, &TickInput::default(), 1.0 / 60.0);

    let events: Vec<_> = state.drain_events().collect();
    assert!(events.contains(&GameEvent::GameOver { score: 9 }));
    assert_eq!(events.last(), Some(&GameEvent::Reset));
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.ball.pos, Vec3::new(0.0, 2.5, 0.0));
    assert_eq!(state.ball.vel_y, 0.0);
    let n = state.obstacles().len();
    assert!((5..=10).contains(&n));
}

#[test]
fn platform_count_is_constant() {
    let mut state = started(5, Settings::default());
    for _ in 0..5000 {
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        assert_eq!(state.platforms().len(), 5);
    }
}

#[test]
fn first_tick_tops_up_obstacles() {
    // Initial count may be anywhere in [0, 10); the first tick corrects it
    for seed in 0..20 {
        let mut state = started(seed, Settings::default());
        assert!(state.obstacles().len() < 10);
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        let n = state.obstacles().len();
        assert!((5..=10).contains(&n), "seed {} left {} asteroids", seed, n);
    }
}

#[test]
fn stall_takes_one_large_step() {
    let mut state = started(6, classic());
    for p in state.platforms_mut() {
        p.pos.y = -4.0;
    }
    state.ball.pos = Vec3::new(0.0, 2.0, 0.0);
    tick(&mut state, &TickInput::default(), 0.5);
    // v = -2.45, y = 2.0 - 1.225
    assert!((state.ball.vel_y + 2.45).abs() < 1e-5);
    assert!((state.ball.pos.y - 0.775).abs() < 1e-5);
}
