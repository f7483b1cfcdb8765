//! Frame timing sources
//!
//! The tick consumes a single `delta` in seconds. No clamping happens here:
//! a stall produces one large delta and the sim takes one large step.

use std::time::{Duration, Instant};

/// Supplies elapsed time since the previous call
pub trait Clock {
    /// Seconds since the last call (0 on the first call for wall clocks)
    fn delta(&mut self) -> f32;

    /// Total seconds handed out so far
    fn elapsed(&self) -> f32;
}

/// Wall-clock timing
#[derive(Debug)]
pub struct SystemClock {
    start_time: Instant,
    last_frame: Instant,
    frame_count: u64,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Clock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        delta.as_secs_f32()
    }

    fn elapsed(&self) -> f32 {
        (self.last_frame - self.start_time).as_secs_f32()
    }
}

/// Deterministic clock returning the same step every call
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: Duration,
    elapsed: Duration,
}

impl FixedClock {
    /// A step that is negative, NaN or too large for a `Duration` is zero
    pub fn new(step_secs: f32) -> Self {
        Self {
            step: Duration::try_from_secs_f32(step_secs.max(0.0)).unwrap_or(Duration::ZERO),
            elapsed: Duration::ZERO,
        }
    }

    /// Clock ticking at `fps` frames per second
    pub fn from_fps(fps: f32) -> Self {
        Self::new(if fps > 0.0 { 1.0 / fps } else { 0.0 })
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.elapsed = self.elapsed.saturating_add(self.step);
        self.step.as_secs_f32()
    }

    fn elapsed(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
