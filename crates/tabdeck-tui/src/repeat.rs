//! Directional auto-repeat
//!
//! A held direction steps once on the press edge, then, after an initial
//! delay, keeps stepping at a fixed interval until released. Confirm never
//! repeats: it fires once, on release.

use tabdeck_core::TabsConfig;

use crate::input::{Button, InputSnapshot};

/// Step direction along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Discrete navigation event produced by the repeater
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Step(Direction),
    Activate,
}

/// Repeat timing in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatTiming {
    /// Hold time before the first repeat is considered
    pub initial_delay: f32,
    pub interval: f32,
}

impl RepeatTiming {
    pub fn from_config(config: &TabsConfig) -> Self {
        Self {
            initial_delay: config.initial_repeat_delay_secs(),
            interval: config.repeat_interval_secs(),
        }
    }
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self::from_config(&TabsConfig::default())
    }
}

/// Hold timer of one direction
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTimer {
    held: bool,
    held_duration: f32,
    next_repeat: f32,
}

impl HoldTimer {
    /// Sample the button for one frame, returning whether it fires
    ///
    /// Repeats fire once `held_duration` reaches `initial_delay + k * interval`
    /// for k = 1, 2, ... At most one event fires per frame; repeats missed
    /// during a long frame are skipped rather than replayed in a burst.
    pub fn update(&mut self, dt: f32, held: bool, timing: &RepeatTiming) -> bool {
        if !held {
            *self = Self::default();
            return false;
        }

        if !self.held {
            self.held = true;
            self.held_duration = 0.0;
            self.next_repeat = timing.initial_delay + timing.interval;
            return true;
        }

        self.held_duration += dt.max(0.0);
        if self.held_duration < self.next_repeat {
            return false;
        }

        self.next_repeat += timing.interval;
        if self.next_repeat <= self.held_duration {
            self.next_repeat = self.held_duration + timing.interval;
        }
        true
    }

    pub fn held_duration(&self) -> f32 {
        self.held_duration
    }
}

/// Turns per-frame input snapshots into at most one [`NavEvent`] per frame
#[derive(Debug, Clone, Default)]
pub struct InputRepeater {
    timing: RepeatTiming,
    left: HoldTimer,
    right: HoldTimer,
}

impl InputRepeater {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            left: HoldTimer::default(),
            right: HoldTimer::default(),
        }
    }

    /// Advance both direction timers and pick this frame's event
    ///
    /// Both timers are always advanced so their state stays coherent; when
    /// several inputs fire on the same frame, right wins over left and a step
    /// wins over confirm.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> Option<NavEvent> {
        let right = self.right.update(dt, input.held(Button::Right), &self.timing);
        let left = self.left.update(dt, input.held(Button::Left), &self.timing);

        if right {
            Some(NavEvent::Step(Direction::Right))
        } else if left {
            Some(NavEvent::Step(Direction::Left))
        } else if input.released(Button::Confirm) {
            Some(NavEvent::Activate)
        } else {
            None
        }
    }

    /// Drop any hold in progress
    pub fn reset(&mut self) {
        self.left = HoldTimer::default();
        self.right = HoldTimer::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Binary fractions keep the accumulated hold time exact
    const TIMING: RepeatTiming = RepeatTiming {
        initial_delay: 0.25,
        interval: 0.125,
    };
    const DT: f32 = 1.0 / 32.0;

    fn hold_right() -> InputSnapshot {
        InputSnapshot::new().with_held(Button::Right)
    }

    fn count_events(repeater: &mut InputRepeater, frames: usize, input: InputSnapshot) -> usize {
        (0..frames)
            .filter(|_| repeater.update(DT, &input).is_some())
            .count()
    }

    #[test]
    fn test_press_edge_fires_immediately() {
        let mut repeater = InputRepeater::new(TIMING);
        assert_eq!(
            repeater.update(DT, &hold_right()),
            Some(NavEvent::Step(Direction::Right))
        );
        assert_eq!(repeater.update(DT, &hold_right()), None);
    }

    #[test]
    fn test_hold_through_delay_and_two_intervals() {
        let mut repeater = InputRepeater::new(TIMING);
        // Press frame plus 0.5s of hold: delay + 2 intervals
        let frames = 1 + (0.5 / DT) as usize;
        assert_eq!(count_events(&mut repeater, frames, hold_right()), 3);
    }

    #[test]
    fn test_hold_just_short_of_second_repeat() {
        let mut repeater = InputRepeater::new(TIMING);
        let frames = (0.5 / DT) as usize;
        assert_eq!(count_events(&mut repeater, frames, hold_right()), 2);
    }

    #[test]
    fn test_release_resets_hold() {
        let mut repeater = InputRepeater::new(TIMING);
        count_events(&mut repeater, 10, hold_right());
        assert_eq!(repeater.update(DT, &InputSnapshot::new()), None);
        assert_eq!(repeater.right.held_duration(), 0.0);
        assert_eq!(
            repeater.update(DT, &hold_right()),
            Some(NavEvent::Step(Direction::Right))
        );
    }

    #[test]
    fn test_no_input_no_event() {
        let mut repeater = InputRepeater::new(TIMING);
        assert_eq!(count_events(&mut repeater, 100, InputSnapshot::new()), 0);
    }

    #[test]
    fn test_directions_tracked_separately() {
        let mut repeater = InputRepeater::new(TIMING);
        count_events(&mut repeater, 5, hold_right());
        let both = hold_right().with_held(Button::Left);
        // Left just went down: its press edge fires even though right is mid-hold
        assert_eq!(
            repeater.update(DT, &both),
            Some(NavEvent::Step(Direction::Left))
        );
    }

    #[test]
    fn test_confirm_fires_on_release_only() {
        let mut repeater = InputRepeater::new(TIMING);
        let pressed = InputSnapshot::new().with_held(Button::Confirm);
        assert_eq!(count_events(&mut repeater, 20, pressed), 0);

        let released = InputSnapshot::new().with_released(Button::Confirm);
        assert_eq!(repeater.update(DT, &released), Some(NavEvent::Activate));
        assert_eq!(repeater.update(DT, &InputSnapshot::new()), None);
    }

    #[test]
    fn test_long_frame_does_not_burst() {
        let mut repeater = InputRepeater::new(TIMING);
        repeater.update(DT, &hold_right());
        // One huge frame covers many repeat slots but fires once
        assert!(repeater.update(2.0, &hold_right()).is_some());
        assert_eq!(repeater.update(DT, &hold_right()), None);
    }
}
