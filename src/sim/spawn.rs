//! Spawn policy
//!
//! Decides where new platforms and asteroids appear and how fast they
//! drift. All randomness is drawn from the state's seeded RNG.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::state::{EntityId, GameState, Star};
use crate::random_centered;

/// Build the initial world: platforms, stars and a random handful of asteroids
pub fn populate_world(state: &mut GameState) {
    let count = state.tuning.platform_count;
    let spacing = state.tuning.platform_spacing;
    for i in 0..count {
        let x = random_centered(&mut state.rng, state.tuning.platform_bound);
        let dx = random_platform_dx(state);
        let y = (i + 1) as f32 * -spacing;
        state.add_platform(Vec2::new(x, y), dx);
    }

    let extent = state.tuning.star_extent;
    let stars = (0..state.tuning.star_count)
        .map(|_| Star {
            pos: Vec3::new(
                random_centered(&mut state.rng, extent),
                random_centered(&mut state.rng, extent),
                random_centered(&mut state.rng, extent),
            ),
        })
        .collect();
    state.set_stars(stars);

    if state.settings.variant.has_obstacles() {
        let initial = initial_obstacle_count(state);
        spawn_obstacles(state, initial);
    }
}

/// Random count in [0, max_obstacles); zero is allowed
pub fn initial_obstacle_count(state: &mut GameState) -> usize {
    let max = state.tuning.max_obstacles;
    if max == 0 {
        return 0;
    }
    state.rng.random_range(0..max)
}

/// Spawn `n` asteroids at random positions inside the asteroid bounds
pub fn spawn_obstacles(state: &mut GameState, n: usize) -> Vec<EntityId> {
    let bound = state.tuning.obstacle_bound;
    let half_speed = state.tuning.obstacle_speed / 2.0;
    let mut ids = Vec::with_capacity(n);
    for _ in 0..n {
        let pos = Vec2::new(
            random_centered(&mut state.rng, bound),
            random_centered(&mut state.rng, bound),
        );
        let vel = Vec2::new(
            random_centered(&mut state.rng, half_speed),
            random_centered(&mut state.rng, half_speed),
        );
        let id = state.add_obstacle(pos, vel);
        log::debug!("Asteroid {} spawned at ({:.2}, {:.2})", id, pos.x, pos.y);
        ids.push(id);
    }
    ids
}

/// Replacement for a platform destroyed by an asteroid
pub fn spawn_replacement_platform(state: &mut GameState) -> EntityId {
    let x = random_centered(&mut state.rng, state.tuning.platform_bound);
    let dx = random_platform_dx(state);
    let y = state.tuning.replacement_platform_y;
    let id = state.add_platform(Vec2::new(x, y), dx);
    log::debug!("Platform {} spawned at ({:.2}, {:.2})", id, x, y);
    id
}

/// Re-randomise every platform in place (identities are kept)
pub fn scatter_platforms(state: &mut GameState) {
    let bound = state.tuning.platform_bound;
    let spread = state.tuning.reset_platform_spread;
    let half_speed = state.tuning.platform_speed / 2.0;
    let count = state.platforms().len();
    let rng = &mut state.rng;
    let fresh: Vec<(Vec2, f32)> = (0..count)
        .map(|_| {
            let x = random_centered(rng, bound);
            let y = random_centered(rng, spread);
            (Vec2::new(x, y), random_centered(rng, half_speed))
        })
        .collect();
    for (platform, (pos, dx)) in state.platforms_mut().iter_mut().zip(fresh) {
        platform.pos = pos;
        platform.dx = dx;
    }
}

fn random_platform_dx(state: &mut GameState) -> f32 {
    random_centered(&mut state.rng, state.tuning.platform_speed / 2.0)
}
