//! Wall-clock time source for animations.
//!
//! Animations either need the absolute time since they started (the
//! sinusoidal patterns) or the delta since the previous frame (the particle
//! physics). [`TimeSource`] provides both so that tests can substitute a
//! scripted clock.

use std::time::Instant;

use crate::TimingError;

/// Source of elapsed and per-frame time, in seconds
pub trait TimeSource {
    /// Seconds since the source was created
    fn elapsed(&self) -> Result<f64, TimingError>;

    /// Seconds since the previous call to `step` (or since creation)
    fn step(&mut self) -> Result<f32, TimingError>;
}

/// Reject readings that would corrupt an animation
pub fn validate_reading(seconds: f64) -> Result<f64, TimingError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(TimingError::InvalidReading(seconds))
    }
}

/// Monotonic clock backed by [`Instant`]
#[derive(Debug)]
pub struct Clock {
    /// When the clock was created.
    start: Instant,
    /// When `step` was last called.
    previous: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            previous: now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn elapsed(&self) -> Result<f64, TimingError> {
        validate_reading(self.start.elapsed().as_secs_f64())
    }

    fn step(&mut self) -> Result<f32, TimingError> {
        let now = Instant::now();
        let delta = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        validate_reading(delta).map(|seconds| seconds as f32)
    }
}
