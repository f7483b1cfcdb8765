//! Entity-to-drawable mapping
//!
//! The sim only knows entity data. The scene owns one drawable per live
//! entity and follows the event stream so nothing is left behind when the
//! sim destroys or trims an entity.

use std::collections::{BTreeMap, VecDeque};

use glam::Vec3;

use crate::consts::{BALL_RADIUS, OBSTACLE_RADIUS, PLATFORM_SIZE};
use crate::sim::{EntityId, GameEvent, GameState};

/// What a drawable looks like
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { width: f32, height: f32 },
}

/// One visual object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub shape: Shape,
    pub pos: Vec3,
    /// 0xRRGGBB
    pub color: u32,
}

impl Drawable {
    fn ball() -> Self {
        Self {
            shape: Shape::Sphere {
                radius: BALL_RADIUS,
            },
            pos: Vec3::ZERO,
            color: 0xff0000,
        }
    }

    fn platform() -> Self {
        Self {
            shape: Shape::Box {
                width: PLATFORM_SIZE[0],
                height: PLATFORM_SIZE[1],
            },
            pos: Vec3::ZERO,
            color: 0x0000ff,
        }
    }

    fn obstacle() -> Self {
        Self {
            shape: Shape::Sphere {
                radius: OBSTACLE_RADIUS,
            },
            pos: Vec3::ZERO,
            color: 0x888888,
        }
    }

    fn star(pos: Vec3) -> Self {
        Self {
            shape: Shape::Sphere { radius: 0.05 },
            pos,
            color: 0xffff00,
        }
    }
}

/// Presentation-side mirror of the world
#[derive(Debug, Clone)]
pub struct Scene {
    pub ball: Drawable,
    pub platforms: BTreeMap<EntityId, Drawable>,
    pub obstacles: BTreeMap<EntityId, Drawable>,
    pub stars: Vec<Drawable>,
    pub score_text: String,
    /// Game-over notices not yet shown to the player
    pub alerts: VecDeque<String>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            ball: Drawable::ball(),
            platforms: BTreeMap::new(),
            obstacles: BTreeMap::new(),
            stars: Vec::new(),
            score_text: "Score: 0".to_string(),
            alerts: VecDeque::new(),
        }
    }

    /// Add and remove drawables to follow the sim's membership changes
    pub fn apply_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PlatformSpawned(id) => {
                self.platforms.insert(id, Drawable::platform());
            }
            GameEvent::PlatformDestroyed(id) => {
                self.platforms.remove(&id);
            }
            GameEvent::ObstacleSpawned(id) => {
                self.obstacles.insert(id, Drawable::obstacle());
            }
            GameEvent::ObstacleDespawned(id) => {
                self.obstacles.remove(&id);
            }
            GameEvent::GameOver { score } => {
                self.alerts.push_back(format!("Game Over! Score: {}", score));
            }
            GameEvent::Started | GameEvent::Reset | GameEvent::Bounced { .. } => {}
        }
    }

    /// Drain the state's events into the scene, then copy positions over
    pub fn update(&mut self, state: &mut GameState) {
        let events: Vec<GameEvent> = state.drain_events().collect();
        for event in &events {
            self.apply_event(event);
        }
        self.sync(state);
    }

    /// Copy positions from the world into existing drawables
    pub fn sync(&mut self, state: &GameState) {
        self.ball.pos = state.ball.pos;
        for platform in state.platforms() {
            if let Some(d) = self.platforms.get_mut(&platform.id) {
                d.pos = platform.pos.extend(0.0);
            }
        }
        for obstacle in state.obstacles() {
            if let Some(d) = self.obstacles.get_mut(&obstacle.id) {
                d.pos = obstacle.pos.extend(0.0);
            }
        }
        if self.stars.len() != state.stars().len() {
            self.stars = state.stars().iter().map(|s| Drawable::star(s.pos)).collect();
        }
        self.score_text = format!("Score: {}", state.score());
    }

    /// Drawables with no live entity behind them
    pub fn orphans(&self, state: &GameState) -> usize {
        let platforms = self
            .platforms
            .keys()
            .filter(|id| state.platform(**id).is_none())
            .count();
        let obstacles = self
            .obstacles
            .keys()
            .filter(|id| state.obstacle(**id).is_none())
            .count();
        platforms + obstacles
    }

    /// Take the oldest pending alert, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop_front()
    }
}
