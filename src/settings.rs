//! Game settings and behaviour choices
//!
//! Separate from `Tuning`: these pick *which* rules run, not how strong
//! they are.

use serde::{Deserialize, Serialize};

use crate::consts::{REFERENCE_FPS, VIEWPORT_HEIGHT};
use crate::tuning::ConfigError;

/// Which rule set the world runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Ball and platforms only
    Classic,
    /// Adds drifting asteroids that destroy platforms
    #[default]
    Asteroids,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Asteroids => "Asteroids",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "simple" => Some(Variant::Classic),
            "asteroids" | "extended" => Some(Variant::Asteroids),
            _ => None,
        }
    }

    /// Whether asteroids exist in this variant
    pub fn has_obstacles(&self) -> bool {
        matches!(self, Variant::Asteroids)
    }
}

/// What happens when the ball overlaps several platforms in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BouncePolicy {
    /// Every overlapping platform bounces and scores
    #[default]
    EveryMatch,
    /// Only the first platform in registry order counts
    FirstMatch,
}

/// How platform and asteroid displacement relates to `delta`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionScaling {
    /// dx/dy are applied once per tick regardless of frame time
    #[default]
    PerTick,
    /// dx/dy are scaled by `delta * REFERENCE_FPS`
    DeltaScaled,
}

impl MotionScaling {
    /// Multiplier applied to per-tick displacement for a step of `dt` seconds
    #[inline]
    pub fn factor(&self, dt: f32) -> f32 {
        match self {
            MotionScaling::PerTick => 1.0,
            MotionScaling::DeltaScaled => dt * REFERENCE_FPS,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    pub bounce_policy: BouncePolicy,
    pub motion: MotionScaling,
    /// Viewport height in pixels (sets the bounce apex)
    pub viewport_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Asteroids,
            bounce_policy: BouncePolicy::EveryMatch,
            motion: MotionScaling::PerTick,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl Settings {
    /// Named presets: `classic`, `asteroids`, `consistent`
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "consistent" => Some(Self {
                variant: Variant::Asteroids,
                bounce_policy: BouncePolicy::FirstMatch,
                motion: MotionScaling::DeltaScaled,
                ..Self::default()
            }),
            other => Variant::from_str(other).map(|variant| Self {
                variant,
                ..Self::default()
            }),
        }
    }

    /// Parse and validate a JSON settings document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewport_height",
                reason: "must be a positive number of pixels".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("Classic"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("extended"), Some(Variant::Asteroids));
        assert_eq!(Variant::from_str("pong"), None);
    }

    #[test]
    fn test_consistent_preset() {
        let s = Settings::from_preset("consistent").unwrap();
        assert_eq!(s.bounce_policy, BouncePolicy::FirstMatch);
        assert_eq!(s.motion, MotionScaling::DeltaScaled);
        assert!(s.variant.has_obstacles());
    }

    #[test]
    fn test_classic_preset_keeps_other_defaults() {
        let s = Settings::from_preset("classic").unwrap();
        assert_eq!(s.variant, Variant::Classic);
        assert_eq!(s.bounce_policy, BouncePolicy::EveryMatch);
        assert_eq!(s.viewport_height, VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_motion_factor() {
        assert_eq!(MotionScaling::PerTick.factor(0.5), 1.0);
        assert!((MotionScaling::DeltaScaled.factor(1.0 / 60.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_json() {
        let s = Settings::from_json(r#"{ "variant": "Classic", "viewport_height": 600.0 }"#).unwrap();
        assert_eq!(s.variant, Variant::Classic);
        assert_eq!(s.viewport_height, 600.0);
        assert!(Settings::from_json(r#"{ "viewport_height": -1.0 }"#).is_err());
    }
}
