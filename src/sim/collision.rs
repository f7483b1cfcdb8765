//! Collision predicates
//!
//! Everything here is pure geometry on the simulation plane. The resolver
//! decides what a hit means.

use glam::Vec2;

use crate::tuning::Tuning;

/// Axis-aligned box centred on a platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub half_width: f32,
    pub half_height: f32,
}

impl CollisionBox {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.collision_half_width, tuning.collision_half_height)
    }

    /// Strict overlap: a point exactly on the edge is outside
    #[inline]
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let d = (point - center).abs();
        d.x < self.half_width && d.y < self.half_height
    }
}

/// Whether a platform has drifted past the lateral walls
#[inline]
pub fn past_lateral_bound(x: f32, bound: f32) -> bool {
    x > bound || x < -bound
}

/// Whether a point has left the square [-bound, bound]²
#[inline]
pub fn outside_square(pos: Vec2, bound: f32) -> bool {
    past_lateral_bound(pos.x, bound) || past_lateral_bound(pos.y, bound)
}

/// Whether the ball has fallen past the loss line
#[inline]
pub fn fell_through(y: f32, fall_limit: f32) -> bool {
    y < fall_limit
}
