//! Game state and core simulation types
//!
//! `GameState` is the world: it owns the ball, every platform and asteroid,
//! the score and the phase. Membership only changes through the add/remove
//! operations here so every change is mirrored by a `GameEvent`.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::bounce_velocity;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Identity of a platform or asteroid, unique for the life of a `GameState`
pub type EntityId = u32;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World not built yet, waiting for the start signal
    NotStarted,
    /// Ticking
    Running,
    /// Ball fell out; only observable between the fall and the reset
    GameOver,
}

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// z is carried for the presentation and never simulated
    pub pos: Vec3,
    pub vel_y: f32,
    pub move_left: bool,
    pub move_right: bool,
}

impl Ball {
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            move_left: false,
            move_right: false,
        }
    }

    /// Position on the simulation plane
    #[inline]
    pub fn xy(&self) -> Vec2 {
        self.pos.truncate()
    }
}

/// A horizontally drifting platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: EntityId,
    pub pos: Vec2,
    /// Displacement per tick, not per second
    pub dx: f32,
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: EntityId,
    pub pos: Vec2,
    /// Displacement per tick, not per second
    pub vel: Vec2,
}

/// Background decoration, never simulated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec3,
}

/// Things the presentation layer needs to hear about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// World was built
    Started,
    Bounced { platform: EntityId, score: u64 },
    PlatformSpawned(EntityId),
    PlatformDestroyed(EntityId),
    ObstacleSpawned(EntityId),
    ObstacleDespawned(EntityId),
    /// Ball fell out; emitted before the reset it triggers
    GameOver { score: u64 },
    /// World was reinitialised after a game over
    Reset,
}

/// Read-only copy of everything the presentation draws
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub time_ticks: u64,
    pub ball: Ball,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub(crate) rng: Pcg32,
    platforms: Vec<Platform>,
    obstacles: Vec<Obstacle>,
    stars: Vec<Star>,
    events: Vec<GameEvent>,
    bounce_velocity: f32,
    next_id: EntityId,
}

impl GameState {
    /// Create an unstarted game. Call `start` (or tick with `start`) to build the world.
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let bounce_velocity = bounce_velocity(tuning.gravity, settings.viewport_height);
        Self {
            seed,
            ball: Ball::at(tuning.ball_spawn),
            tuning,
            settings,
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            stars: Vec::new(),
            events: Vec::new(),
            bounce_velocity,
            next_id: 1,
        }
    }

    /// Unstarted game with default tuning and settings
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(seed, Tuning::default(), Settings::default())
    }

    /// Build the world and begin running. Ignored unless `NotStarted`.
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            log::debug!("Start ignored in phase {:?}", self.phase);
            return;
        }
        self.ball = Ball::at(self.tuning.ball_spawn);
        self.score = 0;
        spawn::populate_world(self);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!(
            "Started (seed {}, {} platforms, {} asteroids)",
            self.seed,
            self.platforms.len(),
            self.obstacles.len()
        );
    }

    /// Reinitialise ball, score, platforms and asteroids and resume running
    pub fn reset(&mut self) {
        let ball_flags = (self.ball.move_left, self.ball.move_right);
        self.ball = Ball::at(self.tuning.ball_spawn);
        (self.ball.move_left, self.ball.move_right) = ball_flags;
        self.score = 0;

        spawn::scatter_platforms(self);

        let ids: Vec<EntityId> = self.obstacles.iter().map(|o| o.id).collect();
        for id in ids {
            self.remove_obstacle(id);
        }
        if self.settings.variant.has_obstacles() {
            let count = self.tuning.min_obstacles;
            spawn::spawn_obstacles(self, count);
        }

        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);
        log::info!("Reset ({} asteroids)", self.obstacles.len());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Vertical speed given to the ball on every bounce
    #[inline]
    pub fn bounce_velocity(&self) -> f32 {
        self.bounce_velocity
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first
    ///
    /// `tick` empties the queue before it does anything else, so after a
    /// tick this holds that tick's events only.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    // --- Platforms ---

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Positions and velocities may change; membership may not
    pub fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }

    pub fn platform(&self, id: EntityId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn add_platform(&mut self, pos: Vec2, dx: f32) -> EntityId {
        let id = self.next_entity_id();
        self.platforms.push(Platform { id, pos, dx });
        self.events.push(GameEvent::PlatformSpawned(id));
        id
    }

    pub fn remove_platform(&mut self, id: EntityId) -> Option<Platform> {
        let idx = self.platforms.iter().position(|p| p.id == id)?;
        let platform = self.platforms.remove(idx);
        self.events.push(GameEvent::PlatformDestroyed(id));
        Some(platform)
    }

    // --- Obstacles ---

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Positions and velocities may change; membership may not
    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn obstacle(&self, id: EntityId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn add_obstacle(&mut self, pos: Vec2, vel: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle { id, pos, vel });
        self.events.push(GameEvent::ObstacleSpawned(id));
        id
    }

    pub fn remove_obstacle(&mut self, id: EntityId) -> Option<Obstacle> {
        let idx = self.obstacles.iter().position(|o| o.id == id)?;
        let obstacle = self.obstacles.remove(idx);
        self.events.push(GameEvent::ObstacleDespawned(id));
        Some(obstacle)
    }

    /// Remove the most recently added asteroid
    pub fn pop_obstacle(&mut self) -> Option<Obstacle> {
        let obstacle = self.obstacles.pop()?;
        self.events.push(GameEvent::ObstacleDespawned(obstacle.id));
        Some(obstacle)
    }

    // --- Stars ---

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub(crate) fn set_stars(&mut self, stars: Vec<Star>) {
        self.stars = stars;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            time_ticks: self.time_ticks,
            ball: self.ball.clone(),
            platforms: self.platforms.clone(),
            obstacles: self.obstacles.clone(),
        }
    }
}
