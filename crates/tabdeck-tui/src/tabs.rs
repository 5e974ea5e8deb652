//! Tab navigation controller
//!
//! Owns the ordered entry list and the focused index, and turns navigation
//! events into animation requests. Logical state always changes synchronously
//! with the event; only the visuals catch up over time.

use tabdeck_core::TabsConfig;
use tracing::debug;

use crate::animation::{AnimationScheduler, EasingFn, EasingTypeExt, SlotStore};
use crate::entry::{Entry, EntryId, Property};
use crate::input::InputSnapshot;
use crate::repeat::{Direction, InputRepeater, NavEvent, RepeatTiming};
use crate::scene::SceneStack;
use crate::style::{root_scroll, style_for, LEAVING_MARGIN, PUSHED_SCROLL_OFFSET};

/// Identity of one animatable value of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Entry(EntryId, Property),
    Scroll,
}

/// Visual phase of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just became the visible scene, settling into place
    Mounting,
    /// Steady state, nothing animating
    Idle,
    /// A step or a return is being animated
    Transitioning,
    /// A child scene was pushed and the focused tab is moving off-stage
    Leaving,
}

/// Where the slice of collection entries sits in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    /// Fixed entries before the collections
    pub prefix: usize,
    /// Fixed entries after the collections
    pub suffix: usize,
}

impl Default for TabLayout {
    fn default() -> Self {
        crate::catalog::ROOT_LAYOUT
    }
}

/// Easing and duration shared by every tween of a transition
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub duration: f32,
    pub easing: EasingFn,
}

impl Transition {
    pub fn from_config(config: &TabsConfig) -> Self {
        Self {
            duration: config.transition_secs(),
            easing: config.easing.function(),
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::from_config(&TabsConfig::default())
    }
}

/// Entry list, focused index and scroll offset
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub(crate) entries: Vec<Entry>,
    pub(crate) active: usize,
    pub(crate) scroll: f32,
    next_id: u64,
}

impl NavigationState {
    /// Give an entry an identity unique within this list
    pub(crate) fn adopt(&mut self, mut entry: Entry) -> Entry {
        self.next_id += 1;
        entry.set_id(EntryId(self.next_id));
        entry
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Put every entry at its steady-state target without animating
    pub(crate) fn snap_steady(&mut self) {
        let active = self.active;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let target = style_for(i, active);
            let visuals = entry.visuals_mut();
            for property in Property::ALL {
                visuals.set(property, target.get(property));
            }
        }
    }
}

impl SlotStore<Slot> for NavigationState {
    fn read(&self, slot: Slot) -> Option<f32> {
        match slot {
            Slot::Scroll => Some(self.scroll),
            Slot::Entry(id, property) => self
                .entries
                .iter()
                .find(|entry| entry.id() == id)
                .map(|entry| entry.visuals().get(property)),
        }
    }

    fn write(&mut self, slot: Slot, value: f32) -> bool {
        match slot {
            Slot::Scroll => {
                self.scroll = value;
                true
            }
            Slot::Entry(id, property) => match self.entry_mut(id) {
                Some(entry) => {
                    entry.visuals_mut().set(property, value);
                    true
                }
                None => false,
            },
        }
    }
}

/// Animated horizontal tab strip
#[derive(Debug, Clone)]
pub struct TabNavigator {
    pub(crate) state: NavigationState,
    pub(crate) scheduler: AnimationScheduler<Slot>,
    pub(crate) phase: Phase,
    pub(crate) layout: TabLayout,
    transition: Transition,
    repeater: InputRepeater,
}

impl TabNavigator {
    /// Build a strip focused on the first entry and mount it
    pub fn new(entries: Vec<Entry>, config: &TabsConfig) -> Self {
        Self::with_parts(
            entries,
            TabLayout::default(),
            Transition::from_config(config),
            RepeatTiming::from_config(config),
        )
    }

    pub fn with_parts(
        entries: Vec<Entry>,
        layout: TabLayout,
        transition: Transition,
        timing: RepeatTiming,
    ) -> Self {
        let mut state = NavigationState::default();
        let entries: Vec<Entry> = entries
            .into_iter()
            .map(|entry| state.adopt(entry))
            .collect();
        state.entries = entries;

        let mut navigator = Self {
            state,
            scheduler: AnimationScheduler::new(),
            phase: Phase::Mounting,
            layout,
            transition,
            repeater: InputRepeater::new(timing),
        };
        navigator.mount();
        navigator
    }

    pub fn entries(&self) -> &[Entry] {
        &self.state.entries
    }

    pub fn len(&self) -> usize {
        self.state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.state.active
    }

    pub fn focused(&self) -> Option<&Entry> {
        self.state.entries.get(self.state.active)
    }

    /// Current, possibly mid-tween, scroll offset
    pub fn scroll(&self) -> f32 {
        self.state.scroll
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn layout(&self) -> TabLayout {
        self.layout
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Number of tweens in flight
    pub fn pending_tweens(&self) -> usize {
        self.scheduler.len()
    }

    /// Show the strip as the visible scene
    ///
    /// Entries snap to their steady state; only the scroll offset animates.
    pub fn mount(&mut self) {
        self.scheduler.clear();
        self.state.snap_steady();
        self.animate(Slot::Scroll, root_scroll(self.state.active));
        self.repeater.reset();
        self.phase = Phase::Mounting;
        debug!("Mounted {} tabs, focus {}", self.len(), self.state.active);
    }

    /// Move focus one tab, wrapping at both ends
    ///
    /// Returns `false` on an empty strip.
    pub fn step(&mut self, direction: Direction) -> bool {
        let len = self.state.entries.len();
        if len == 0 {
            return false;
        }

        let active = self.state.active as isize + direction.delta() + len as isize;
        self.state.active = active.rem_euclid(len as isize) as usize;
        debug!("Step {:?}: focus {}", direction, self.state.active);

        self.animate_steady();
        self.phase = Phase::Transitioning;
        true
    }

    /// Confirm the focused tab
    ///
    /// Plays the "dive in" transition and runs the tab's command. Without a
    /// command (or without entries) nothing happens and `false` is returned.
    pub fn activate(&mut self, stack: &mut dyn SceneStack) -> bool {
        let active = self.state.active;
        let Some(focused) = self.state.entries.get(active) else {
            return false;
        };
        let Some(command) = focused.command().cloned() else {
            debug!("Tab '{}' has no command, ignoring activation", focused.label);
            return false;
        };
        let focused_id = focused.id();

        self.animate(Slot::Entry(focused_id, Property::Margin), LEAVING_MARGIN);
        let others: Vec<EntryId> = self
            .state
            .entries
            .iter()
            .filter(|entry| entry.id() != focused_id)
            .map(Entry::id)
            .collect();
        for id in others {
            self.animate(Slot::Entry(id, Property::IconAlpha), 0.0);
        }
        self.animate(Slot::Scroll, root_scroll(active) + PUSHED_SCROLL_OFFSET);
        self.phase = Phase::Leaving;

        command.execute(stack);
        true
    }

    /// The child scene on top was popped: animate back to steady state
    pub fn segue_back(&mut self) {
        self.repeater.reset();
        self.animate_steady();
        self.phase = Phase::Transitioning;
        debug!("Returned to tabs, focus {}", self.state.active);
    }

    /// Apply one navigation event
    pub fn handle(&mut self, event: NavEvent, stack: &mut dyn SceneStack) -> bool {
        match event {
            NavEvent::Step(direction) => self.step(direction),
            NavEvent::Activate => self.activate(stack),
        }
    }

    /// Per-frame update while the strip is the visible scene
    pub fn update(&mut self, dt: f32, input: &InputSnapshot, stack: &mut dyn SceneStack) {
        if let Some(event) = self.repeater.update(dt, input) {
            self.handle(event, stack);
        }
        self.tick(dt);
    }

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.scheduler.tick(&mut self.state, dt);
        if !self.scheduler.is_animating()
            && matches!(self.phase, Phase::Mounting | Phase::Transitioning)
        {
            self.phase = Phase::Idle;
        }
    }

    /// Tween every entry toward its steady state and the scroll toward the focus
    fn animate_steady(&mut self) {
        let active = self.state.active;
        let targets: Vec<(EntryId, usize)> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.id(), i))
            .collect();

        for (id, i) in targets {
            let target = style_for(i, active);
            for property in Property::ALL {
                self.animate(Slot::Entry(id, property), target.get(property));
            }
        }
        self.animate(Slot::Scroll, root_scroll(active));
    }

    fn animate(&mut self, slot: Slot, target: f32) {
        let Transition { duration, easing } = self.transition;
        self.scheduler
            .animate_to(&mut self.state, slot, target, duration, easing);
    }
}
