//! Collision resolution
//!
//! Runs after the physics step, in order:
//! 1. ball/platform bounces
//! 2. asteroid/platform destruction
//! 3. asteroids leaving the field
//! 4. asteroid population correction
//!
//! Destruction is collect-then-remove: a scan marks what to destroy, a
//! separate pass removes it and spawns replacements. Nothing spawned during
//! a pass is examined by that pass.

use super::collision::{CollisionBox, outside_square};
use super::spawn;
use super::state::{EntityId, GameEvent, GameState};
use crate::settings::BouncePolicy;

/// Bounce the ball off every platform it overlaps while not rising.
/// Returns the number of bounces scored.
pub fn resolve_bounces(state: &mut GameState) -> u32 {
    let hit_box = CollisionBox::from_tuning(&state.tuning);
    let ball_pos = state.ball.xy();
    if state.ball.vel_y > 0.0 {
        return 0;
    }

    // Every platform is tested against the post-physics ball, not the
    // snapped one, so simultaneous overlaps each count
    let mut hits: Vec<(EntityId, f32)> = state
        .platforms()
        .iter()
        .filter(|p| hit_box.contains(p.pos, ball_pos))
        .map(|p| (p.id, p.pos.y))
        .collect();
    if state.settings.bounce_policy == BouncePolicy::FirstMatch {
        hits.truncate(1);
    }

    let bounce_velocity = state.bounce_velocity();
    let snap = state.tuning.bounce_snap;
    for &(platform, platform_y) in &hits {
        state.ball.vel_y = bounce_velocity;
        state.ball.pos.y = platform_y + snap;
        state.score += 1;
        let score = state.score;
        state.push_event(GameEvent::Bounced { platform, score });
        log::trace!("Bounce on platform {} (score {})", platform, score);
    }
    hits.len() as u32
}

/// Destroy every asteroid/platform pair that overlaps and replace both.
/// Each entity takes part in at most one pair. Returns the pair count.
pub fn resolve_obstacle_platform(state: &mut GameState) -> usize {
    let hit_box = CollisionBox::from_tuning(&state.tuning);
    let platforms = state.platforms();
    let mut platform_used = vec![false; platforms.len()];
    let mut pairs: Vec<(EntityId, EntityId)> = Vec::new();

    for obstacle in state.obstacles() {
        let hit = platforms
            .iter()
            .enumerate()
            .find(|(j, p)| !platform_used[*j] && hit_box.contains(p.pos, obstacle.pos));
        if let Some((j, platform)) = hit {
            platform_used[j] = true;
            pairs.push((obstacle.id, platform.id));
        }
    }

    for &(obstacle, platform) in &pairs {
        state.remove_obstacle(obstacle);
        state.remove_platform(platform);
        log::debug!("Asteroid {} destroyed platform {}", obstacle, platform);
    }
    for _ in &pairs {
        spawn::spawn_replacement_platform(state);
        spawn::spawn_obstacles(state, 1);
    }
    pairs.len()
}

/// Despawn asteroids that left the field and replace each one.
/// Returns how many left.
pub fn resolve_obstacle_exits(state: &mut GameState) -> usize {
    let bound = state.tuning.obstacle_bound;
    let gone: Vec<EntityId> = state
        .obstacles()
        .iter()
        .filter(|o| outside_square(o.pos, bound))
        .map(|o| o.id)
        .collect();

    for &id in &gone {
        state.remove_obstacle(id);
    }
    spawn::spawn_obstacles(state, gone.len());
    gone.len()
}

/// Top up to `min_obstacles` one at a time, then trim from the end down to
/// `max_obstacles`
pub fn correct_population(state: &mut GameState) {
    let min = state.tuning.min_obstacles;
    let max = state.tuning.max_obstacles;

    while state.obstacles().len() < min {
        spawn::spawn_obstacles(state, 1);
    }
    while state.obstacles().len() > max {
        if let Some(excess) = state.pop_obstacle() {
            log::debug!("Trimmed asteroid {}", excess.id);
        }
    }
}

/// Run every resolution pass for the current variant
pub fn resolve(state: &mut GameState) {
    resolve_bounces(state);
    if state.settings.variant.has_obstacles() {
        resolve_obstacle_platform(state);
        resolve_obstacle_exits(state);
        correct_population(state);
    }
}
