//! Time calculation utilities for tweens

use std::time::{Duration, Instant};

/// Longest frame delta handed to the animation system
///
/// A stalled terminal (suspended process, slow redraw) would otherwise
/// finish every running transition in a single frame.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Animation progress (0.0 to 1.0) from elapsed time and duration, both in seconds
///
/// A non-positive duration counts as already finished.
#[inline]
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Frame duration for a target frame rate
pub fn frame_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis(1000 / fps as u64)
    }
}

/// Measures wall-clock time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call, clamped to [`MAX_FRAME_DELTA`]
    ///
    /// The first call reports a nominal 60 fps frame.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 1.0 / 60.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, MAX_FRAME_DELTA)
    }
}
