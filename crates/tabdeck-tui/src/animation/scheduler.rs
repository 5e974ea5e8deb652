//! Per-slot tween registry
//!
//! Tweens are keyed by the identity of the property they drive, never by the
//! value. Scheduling onto a slot that is already animating replaces the old
//! tween and restarts from the slot's current, possibly interpolated, value,
//! so a retargeted property never snaps.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::easing::EasingFn;
use super::timing::{lerp, progress};

/// Storage the scheduler reads start values from and writes frames into
pub trait SlotStore<K> {
    /// Current value of a slot, `None` when the slot no longer exists
    fn read(&self, slot: K) -> Option<f32>;

    /// Write a value, returning `false` when the slot no longer exists
    fn write(&mut self, slot: K, value: f32) -> bool;
}

/// One in-flight interpolation of a scalar
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Seconds
    duration: f32,
    /// Seconds
    elapsed: f32,
    easing: EasingFn,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: EasingFn) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds (negative deltas are ignored)
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Interpolated value at the current elapsed time
    ///
    /// Pinned to the end value once complete so no float drift survives.
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        let t = progress(self.elapsed, self.duration);
        lerp(self.from, self.to, (self.easing)(t))
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }
}

/// Registry of active tweens, at most one per slot
#[derive(Debug, Clone)]
pub struct AnimationScheduler<K> {
    tweens: HashMap<K, Tween>,
}

impl<K> Default for AnimationScheduler<K> {
    fn default() -> Self {
        Self {
            tweens: HashMap::new(),
        }
    }
}

impl<K> AnimationScheduler<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween on `slot` toward `target`, replacing any tween already running there
    ///
    /// The new tween starts from the slot's current value. A non-positive
    /// duration writes `target` immediately and leaves nothing scheduled.
    pub fn schedule<S: SlotStore<K>>(
        &mut self,
        store: &mut S,
        slot: K,
        target: f32,
        duration: f32,
        easing: EasingFn,
    ) {
        let Some(current) = store.read(slot) else {
            trace!("Ignoring tween for missing slot {:?}", slot);
            self.tweens.remove(&slot);
            return;
        };

        if duration <= 0.0 {
            self.tweens.remove(&slot);
            store.write(slot, target);
            return;
        }

        self.tweens
            .insert(slot, Tween::new(current, target, duration, easing));
    }

    /// Like [`schedule`](Self::schedule), but skips slots that are idle and already at `target`
    ///
    /// Returns whether a tween was scheduled.
    pub fn animate_to<S: SlotStore<K>>(
        &mut self,
        store: &mut S,
        slot: K,
        target: f32,
        duration: f32,
        easing: EasingFn,
    ) -> bool {
        if !self.tweens.contains_key(&slot) && store.read(slot) == Some(target) {
            return false;
        }
        self.schedule(store, slot, target, duration, easing);
        self.tweens.contains_key(&slot)
    }

    /// Advance every tween by `dt` seconds and write the eased values
    ///
    /// Finished tweens and tweens whose slot disappeared are dropped.
    pub fn tick<S: SlotStore<K>>(&mut self, store: &mut S, dt: f32) {
        self.tweens.retain(|slot, tween| {
            tween.advance(dt);
            if !store.write(*slot, tween.value()) {
                trace!("Dropping tween for vanished slot {:?}", slot);
                return false;
            }
            !tween.is_complete()
        });
    }

    /// Stop the tween on `slot`, leaving the slot at its current value
    pub fn cancel(&mut self, slot: K) -> bool {
        self.tweens.remove(&slot).is_some()
    }

    /// Stop every tween whose slot matches `predicate`
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) {
        self.tweens.retain(|slot, _| !predicate(slot));
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn get(&self, slot: K) -> Option<&Tween> {
        self.tweens.get(&slot)
    }

    /// End value of the tween on `slot`, if one is running
    pub fn target(&self, slot: K) -> Option<f32> {
        self.tweens.get(&slot).map(Tween::end_value)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::{linear, out_sine};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        A,
        B,
        Gone,
    }

    #[derive(Default)]
    struct Fields {
        a: f32,
        b: f32,
    }

    impl SlotStore<Field> for Fields {
        fn read(&self, slot: Field) -> Option<f32> {
            match slot {
                Field::A => Some(self.a),
                Field::B => Some(self.b),
                Field::Gone => None,
            }
        }

        fn write(&mut self, slot: Field, value: f32) -> bool {
            match slot {
                Field::A => self.a = value,
                Field::B => self.b = value,
                Field::Gone => return false,
            }
            true
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_tick_interpolates_and_completes() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 100.0, 1.0, linear);

        scheduler.tick(&mut fields, 0.25);
        assert_close(fields.a, 25.0);
        assert!(scheduler.is_animating());

        scheduler.tick(&mut fields, 1.0);
        assert_eq!(fields.a, 100.0);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_final_value_is_exact() {
        let mut fields = Fields { a: 0.1, b: 0.0 };
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 0.75, 0.15, out_sine);
        for _ in 0..20 {
            scheduler.tick(&mut fields, 1.0 / 60.0);
        }
        assert_eq!(fields.a, 0.75);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_reschedule_continues_from_current_value() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 100.0, 1.0, linear);
        scheduler.tick(&mut fields, 0.5);
        assert_close(fields.a, 50.0);

        scheduler.schedule(&mut fields, Field::A, 0.0, 1.0, linear);
        assert_eq!(scheduler.len(), 1);
        let tween = scheduler.get(Field::A).unwrap();
        assert_close(tween.start_value(), 50.0);
        assert_eq!(tween.end_value(), 0.0);

        // The first frame after retargeting continues from 50, not from 0 or 100
        scheduler.tick(&mut fields, 0.1);
        assert_close(fields.a, 45.0);
    }

    #[test]
    fn test_time_slicing_is_consistent() {
        let splits = [(0.05, 0.025), (0.0, 0.075), (0.07, 0.005), (0.0375, 0.0375)];
        for (dt1, dt2) in splits {
            let mut sliced = Fields::default();
            let mut whole = Fields::default();
            let mut a = AnimationScheduler::new();
            let mut b = AnimationScheduler::new();
            a.schedule(&mut sliced, Field::A, 500.0, 0.15, out_sine);
            b.schedule(&mut whole, Field::A, 500.0, 0.15, out_sine);

            a.tick(&mut sliced, dt1);
            a.tick(&mut sliced, dt2);
            b.tick(&mut whole, dt1 + dt2);

            assert_close(sliced.a, whole.a);
        }
    }

    #[test]
    fn test_zero_duration_resolves_immediately() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 42.0, 0.0, linear);
        assert_eq!(fields.a, 42.0);
        assert!(scheduler.is_empty());

        scheduler.schedule(&mut fields, Field::B, 7.0, -1.0, linear);
        assert_eq!(fields.b, 7.0);
    }

    #[test]
    fn test_zero_duration_tween_yields_end_on_first_tick() {
        for dt in [0.0, 0.016, 10.0] {
            let mut tween = Tween::new(3.0, 9.0, 0.0, linear);
            tween.advance(dt);
            assert!(tween.is_complete());
            assert_eq!(tween.value(), 9.0);
        }
    }

    #[test]
    fn test_slots_are_independent() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 10.0, 1.0, linear);
        scheduler.schedule(&mut fields, Field::B, 20.0, 2.0, linear);

        scheduler.tick(&mut fields, 1.0);
        assert_eq!(fields.a, 10.0);
        assert_close(fields.b, 10.0);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.target(Field::B), Some(20.0));
    }

    #[test]
    fn test_animate_to_skips_idle_slot_at_target() {
        let mut fields = Fields { a: 5.0, b: 0.0 };
        let mut scheduler = AnimationScheduler::new();
        assert!(!scheduler.animate_to(&mut fields, Field::A, 5.0, 1.0, linear));
        assert!(scheduler.is_empty());

        // An in-flight tween is retargeted even when the value matches
        scheduler.schedule(&mut fields, Field::A, 10.0, 1.0, linear);
        assert!(scheduler.animate_to(&mut fields, Field::A, 5.0, 1.0, linear));
        assert_eq!(scheduler.target(Field::A), Some(5.0));
    }

    #[test]
    fn test_missing_slots_are_dropped() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::Gone, 1.0, 1.0, linear);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut fields = Fields::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(&mut fields, Field::A, 10.0, 1.0, linear);
        scheduler.schedule(&mut fields, Field::B, 10.0, 1.0, linear);
        scheduler.tick(&mut fields, 0.5);

        assert!(scheduler.cancel(Field::A));
        assert!(!scheduler.cancel(Field::A));
        scheduler.tick(&mut fields, 0.5);
        assert_close(fields.a, 5.0);

        scheduler.cancel_where(|slot| *slot == Field::B);
        assert!(scheduler.is_empty());
    }
}
