//! Simulation core
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - Membership changes only through `GameState` add/remove, each mirrored
//!   by a `GameEvent`

pub mod collision;
pub mod physics;
pub mod resolve;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::CollisionBox;
pub use state::{
    Ball, EntityId, GameEvent, GamePhase, GameState, Obstacle, Platform, Snapshot, Star,
};
pub use tick::{Direction, TickInput, tick};
