//! Star Bounce - a ball bouncing down through moving platforms and asteroids
//!
//! Core modules:
//! - `sim`: Simulation core (physics, collisions, spawning, game state)
//! - `clock`: Frame timing sources feeding `delta` into the tick
//! - `renderer`: Presentation side (entity-to-drawable mapping, text frames)
//! - `tuning`: Data-driven game balance
//! - `settings`: Behavioural choices and viewport

pub mod clock;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use clock::{Clock, FixedClock, SystemClock};
pub use settings::{BouncePolicy, MotionScaling, Settings, Variant};
pub use tuning::Tuning;

use rand::Rng;

/// Game configuration constants (defaults for `Tuning`/`Settings`)
pub mod consts {
    /// Downward acceleration on the ball (units/s²), tuned for slow falling
    pub const GRAVITY: f32 = 4.9;
    /// Horizontal ball speed while a direction is held (units/s)
    pub const BALL_SPEED: f32 = 2.0;
    /// Ball spawn position (x, y, z)
    pub const BALL_SPAWN: [f32; 3] = [0.0, 2.5, 0.0];
    /// Ball visual radius
    pub const BALL_RADIUS: f32 = 0.2;

    /// Platforms in play at all times
    pub const PLATFORM_COUNT: usize = 5;
    /// Width of the platform dx range (dx drawn from ±speed/2)
    pub const PLATFORM_SPEED: f32 = 0.05;
    /// Vertical gap between platforms in the initial layout
    pub const PLATFORM_SPACING: f32 = 1.5;
    /// Platforms reflect off x = ±bound
    pub const PLATFORM_BOUND: f32 = 5.0;
    /// Height at which a destroyed platform's replacement appears
    pub const REPLACEMENT_PLATFORM_Y: f32 = -1.5;
    /// Reset scatters platforms over y in [-spread, spread]
    pub const RESET_PLATFORM_SPREAD: f32 = 2.5;
    /// Platform visual size (width, height)
    pub const PLATFORM_SIZE: [f32; 2] = [1.0, 0.1];

    /// Collision box half extents around a platform center
    pub const COLLISION_HALF_WIDTH: f32 = 0.5;
    pub const COLLISION_HALF_HEIGHT: f32 = 0.1;
    /// Ball is placed this far above a platform after bouncing
    pub const BOUNCE_SNAP: f32 = 0.2;
    /// Ball below this y ends the run
    pub const FALL_LIMIT: f32 = -5.0;

    /// Asteroids live inside [-bound, bound] on both axes
    pub const OBSTACLE_BOUND: f32 = 10.0;
    /// Width of the asteroid velocity range (dx, dy drawn from ±speed/2)
    pub const OBSTACLE_SPEED: f32 = 0.1;
    pub const MIN_OBSTACLES: usize = 5;
    pub const MAX_OBSTACLES: usize = 10;
    /// Asteroid visual radius
    pub const OBSTACLE_RADIUS: f32 = 0.1;

    /// Background stars
    pub const STAR_COUNT: usize = 50;
    pub const STAR_EXTENT: f32 = 10.0;

    /// Default viewport height in pixels (bounce apex is a third of it)
    pub const VIEWPORT_HEIGHT: f32 = 900.0;
    /// Pixels per world unit used when deriving the bounce apex
    pub const PIXELS_PER_UNIT: f32 = 100.0;
    /// Frame rate that per-tick displacements were tuned for
    pub const REFERENCE_FPS: f32 = 60.0;
}

/// Launch speed that carries the ball to an apex of a third of the viewport
#[inline]
pub fn bounce_velocity(gravity: f32, viewport_height: f32) -> f32 {
    (2.0 * gravity * (viewport_height / 3.0 / consts::PIXELS_PER_UNIT)).sqrt()
}

/// Uniform sample from [-extent, extent]
#[inline]
pub fn random_centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    rng.random_range(-extent..=extent)
}
