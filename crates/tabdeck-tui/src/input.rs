use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Left,
    Right,
    Confirm,
    Back,
    Rescan,
}

impl Action {
    /// The pad button this action drives, if it is a held input
    pub fn button(self) -> Option<Button> {
        match self {
            Action::Left => Some(Button::Left),
            Action::Right => Some(Button::Right),
            Action::Confirm => Some(Button::Confirm),
            Action::Back => Some(Button::Back),
            Action::Quit | Action::Rescan => None,
        }
    }
}

/// Buttons sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Confirm,
    Back,
}

impl Button {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Confirm => 2,
            Button::Back => 3,
        }
    }
}

/// Per-frame input state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: [bool; Button::COUNT],
    released: [bool; Button::COUNT],
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the button is currently down
    pub fn held(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    /// Whether the button went up since the previous frame
    pub fn released(&self, button: Button) -> bool {
        self.released[button.index()]
    }

    pub fn with_held(mut self, button: Button) -> Self {
        self.held[button.index()] = true;
        self
    }

    pub fn with_released(mut self, button: Button) -> Self {
        self.released[button.index()] = true;
        self
    }
}

/// Builds [`InputSnapshot`]s out of terminal key events
///
/// Terminals with keyboard enhancement report key releases, so holds are
/// tracked for real. Everywhere else a key press is a one-frame tap: held on
/// the frame it arrives, released on the next one. A press and release that
/// both land within one frame are also turned into a tap, so every press is
/// seen held for at least one snapshot.
#[derive(Debug, Clone, Default)]
pub struct ButtonTracker {
    reports_release: bool,
    held: [bool; Button::COUNT],
    released: [bool; Button::COUNT],
    taps: [bool; Button::COUNT],
    /// Pressed since the last snapshot
    pressed: [bool; Button::COUNT],
}

impl ButtonTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            ..Default::default()
        }
    }

    /// Feed one key event for a button
    pub fn on_key(&mut self, button: Button, kind: KeyEventKind) {
        let i = button.index();
        match kind {
            KeyEventKind::Press if self.reports_release => {
                self.held[i] = true;
                self.pressed[i] = true;
                self.taps[i] = false;
            }
            KeyEventKind::Press => {
                self.held[i] = true;
                self.taps[i] = true;
            }
            // Auto-repeat comes from the repeater, not from the terminal
            KeyEventKind::Repeat if self.reports_release => {}
            KeyEventKind::Repeat => {
                self.held[i] = true;
                self.taps[i] = true;
            }
            KeyEventKind::Release if self.pressed[i] => self.taps[i] = true,
            KeyEventKind::Release => {
                if self.held[i] {
                    self.released[i] = true;
                }
                self.held[i] = false;
            }
        }
    }

    /// Take the state of the current frame and prepare the next one
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            held: self.held,
            released: self.released,
        };

        self.released = [false; Button::COUNT];
        self.pressed = [false; Button::COUNT];
        for i in 0..Button::COUNT {
            if self.taps[i] {
                // A tap is released on the frame after it was seen held
                self.taps[i] = false;
                self.held[i] = false;
                self.released[i] = true;
            }
        }

        snapshot
    }

    /// Forget everything, e.g. when the focused scene changes
    pub fn reset(&mut self) {
        let reports_release = self.reports_release;
        *self = Self::new(reports_release);
    }
}

/// Resolve a key event to an action through the keymap
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Option<Action> {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return Some(*action);
    }

    // Shifted letters arrive with the SHIFT modifier on some terminals only
    match key.code {
        KeyCode::Char(c) if key.modifiers == KeyModifiers::SHIFT => keymap
            .get(&KeyBinding::simple(KeyCode::Char(c)))
            .copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_is_held_then_released() {
        let mut tracker = ButtonTracker::new(false);
        tracker.on_key(Button::Confirm, KeyEventKind::Press);

        let first = tracker.snapshot();
        assert!(first.held(Button::Confirm));
        assert!(!first.released(Button::Confirm));

        let second = tracker.snapshot();
        assert!(!second.held(Button::Confirm));
        assert!(second.released(Button::Confirm));

        let third = tracker.snapshot();
        assert!(!third.held(Button::Confirm));
        assert!(!third.released(Button::Confirm));
    }

    #[test]
    fn test_real_hold_until_release() {
        let mut tracker = ButtonTracker::new(true);
        tracker.on_key(Button::Right, KeyEventKind::Press);
        for _ in 0..5 {
            tracker.on_key(Button::Right, KeyEventKind::Repeat);
            assert!(tracker.snapshot().held(Button::Right));
        }

        tracker.on_key(Button::Right, KeyEventKind::Release);
        let snapshot = tracker.snapshot();
        assert!(!snapshot.held(Button::Right));
        assert!(snapshot.released(Button::Right));
        assert!(!tracker.snapshot().released(Button::Right));
    }

    #[test]
    fn test_press_and_release_in_one_frame() {
        let mut tracker = ButtonTracker::new(true);
        tracker.on_key(Button::Right, KeyEventKind::Press);
        tracker.on_key(Button::Right, KeyEventKind::Release);

        let first = tracker.snapshot();
        assert!(first.held(Button::Right));
        assert!(!first.released(Button::Right));

        let second = tracker.snapshot();
        assert!(!second.held(Button::Right));
        assert!(second.released(Button::Right));

        assert_eq!(tracker.snapshot(), InputSnapshot::new());
    }

    #[test]
    fn test_press_again_within_frame_stays_held() {
        let mut tracker = ButtonTracker::new(true);
        tracker.on_key(Button::Left, KeyEventKind::Press);
        tracker.on_key(Button::Left, KeyEventKind::Release);
        tracker.on_key(Button::Left, KeyEventKind::Press);

        assert!(tracker.snapshot().held(Button::Left));
        let second = tracker.snapshot();
        assert!(second.held(Button::Left));
        assert!(!second.released(Button::Left));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = ButtonTracker::new(true);
        tracker.on_key(Button::Back, KeyEventKind::Release);
        assert_eq!(tracker.snapshot(), InputSnapshot::new());
    }

    #[test]
    fn test_handle_key_event() {
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &keymap), Some(Action::Right));

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &keymap), Some(Action::Quit));

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &keymap), None);
    }

    #[test]
    fn test_action_buttons() {
        assert_eq!(Action::Left.button(), Some(Button::Left));
        assert_eq!(Action::Quit.button(), None);
    }
}
