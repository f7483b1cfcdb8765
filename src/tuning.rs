//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a balance pass never has
//! to touch the sim code. Defaults reproduce the classic feel.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load or validate a `Tuning` or `Settings` document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Balance numbers for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub ball_speed: f32,
    pub ball_spawn: Vec3,

    pub platform_count: usize,
    /// dx for a platform is drawn from [-speed/2, speed/2]
    pub platform_speed: f32,
    pub platform_spacing: f32,
    pub platform_bound: f32,
    pub replacement_platform_y: f32,
    pub reset_platform_spread: f32,

    pub collision_half_width: f32,
    pub collision_half_height: f32,
    pub bounce_snap: f32,
    pub fall_limit: f32,

    pub obstacle_bound: f32,
    /// dx, dy for an asteroid are drawn from [-speed/2, speed/2]
    pub obstacle_speed: f32,
    pub min_obstacles: usize,
    pub max_obstacles: usize,

    pub star_count: usize,
    pub star_extent: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ball_speed: BALL_SPEED,
            ball_spawn: Vec3::from_array(BALL_SPAWN),

            platform_count: PLATFORM_COUNT,
            platform_speed: PLATFORM_SPEED,
            platform_spacing: PLATFORM_SPACING,
            platform_bound: PLATFORM_BOUND,
            replacement_platform_y: REPLACEMENT_PLATFORM_Y,
            reset_platform_spread: RESET_PLATFORM_SPREAD,

            collision_half_width: COLLISION_HALF_WIDTH,
            collision_half_height: COLLISION_HALF_HEIGHT,
            bounce_snap: BOUNCE_SNAP,
            fall_limit: FALL_LIMIT,

            obstacle_bound: OBSTACLE_BOUND,
            obstacle_speed: OBSTACLE_SPEED,
            min_obstacles: MIN_OBSTACLES,
            max_obstacles: MAX_OBSTACLES,

            star_count: STAR_COUNT,
            star_extent: STAR_EXTENT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::invalid("gravity", "must be a positive number"));
        }
        if self.platform_count == 0 {
            return Err(ConfigError::invalid("platform_count", "need at least one platform"));
        }
        if self.min_obstacles > self.max_obstacles {
            return Err(ConfigError::invalid(
                "min_obstacles",
                format!(
                    "{} exceeds max_obstacles ({})",
                    self.min_obstacles, self.max_obstacles
                ),
            ));
        }
        let positive = [
            ("platform_bound", self.platform_bound),
            ("obstacle_bound", self.obstacle_bound),
            ("collision_half_width", self.collision_half_width),
            ("collision_half_height", self.collision_half_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, "must be a positive number"));
            }
        }
        let non_negative = [
            ("ball_speed", self.ball_speed),
            ("platform_speed", self.platform_speed),
            ("reset_platform_spread", self.reset_platform_spread),
            ("obstacle_speed", self.obstacle_speed),
            ("star_extent", self.star_extent),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, "must be zero or more"));
            }
        }
        Ok(())
    }
}
