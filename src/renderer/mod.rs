//! Presentation side
//!
//! Mirrors the sim into drawables and renders text frames. Nothing in
//! here feeds back into the simulation.

pub mod ascii;
pub mod scene;

pub use ascii::{View, render_frame};
pub use scene::{Drawable, Scene, Shape};
