//! Splicing freshly discovered collections into a live tab strip

use tracing::debug;

use crate::entry::{Entry, Property};
use crate::style::{pushed_scroll, root_scroll, LEAVING_MARGIN};
use crate::tabs::{Phase, TabNavigator};

/// Bounds of the collection slice, clamped to the list length
fn replacement_range(len: usize, prefix: usize, suffix: usize) -> (usize, usize) {
    let start = prefix.min(len);
    let end = len.saturating_sub(suffix).max(start);
    (start, end)
}

impl TabNavigator {
    /// Replace the collection entries with `discovered`
    ///
    /// `discovered` must already be sorted. Entries outside the collection
    /// slice keep their identity. Every in-flight tween is dropped and all
    /// visuals snap to their steady state, so nothing pops once the strip
    /// becomes visible again. `scene_depth` is the number of scenes stacked
    /// above the strip and selects the scroll formula.
    pub fn refresh(&mut self, discovered: Vec<Entry>, scene_depth: usize) {
        let len = self.state.entries.len();
        let (start, end) = replacement_range(len, self.layout.prefix, self.layout.suffix);
        let old_count = end - start;
        let new_count = discovered.len();

        let adopted: Vec<Entry> = discovered
            .into_iter()
            .map(|entry| self.state.adopt(entry))
            .collect();
        self.state.entries.splice(start..end, adopted);

        let mut active = self.state.active;
        if active >= start {
            active = (active + new_count).saturating_sub(old_count).max(start);
        }
        self.state.active = active.min(self.state.entries.len().saturating_sub(1));

        self.scheduler.clear();
        self.state.snap_steady();

        if scene_depth == 0 {
            self.state.scroll = root_scroll(self.state.active);
            self.phase = Phase::Idle;
        } else {
            let active = self.state.active;
            if let Some(focused) = self.state.entries.get_mut(active) {
                focused.visuals_mut().set(Property::Margin, LEAVING_MARGIN);
            }
            self.state.scroll = pushed_scroll(active);
            self.phase = Phase::Leaving;
        }

        debug!(
            "Refreshed collections: {} -> {}, focus {}",
            old_count, new_count, self.state.active
        );
    }

    /// Number of collection entries currently in the strip
    pub fn collection_count(&self) -> usize {
        let (start, end) =
            replacement_range(self.len(), self.layout.prefix, self.layout.suffix);
        end - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeat::Direction;
    use crate::scene::{Command, SceneHistory};
    use crate::style::{FOCUSED_WIDTH, UNFOCUSED_WIDTH};
    use crate::tabs::Slot;
    use tabdeck_core::TabsConfig;
    use std::path::PathBuf;

    fn fixed_entries() -> Vec<Entry> {
        vec![
            Entry::new("Main Menu", "", "main").with_command(Command::OpenMainMenu),
            Entry::new("Settings", "", "setting").with_command(Command::OpenSettings),
            Entry::new("Scan", "", "add").with_command(Command::BrowseForScan {
                start_dir: PathBuf::from("/home"),
            }),
        ]
    }

    fn collections(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|name| {
                Entry::new(*name, "0 Games - 0 Favorites", *name).with_command(
                    Command::OpenCollection {
                        path: PathBuf::from(format!("/lists/{}.lpl", name)),
                    },
                )
            })
            .collect()
    }

    fn labels(nav: &TabNavigator) -> Vec<&str> {
        nav.entries().iter().map(|e| e.label.as_str()).collect()
    }

    fn focus(nav: &mut TabNavigator, index: usize) {
        while nav.active_index() != index {
            nav.step(Direction::Right);
        }
    }

    #[test]
    fn test_insert_shifts_focus_past_region() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        focus(&mut nav, 2);

        nav.refresh(collections(&["C1", "C2", "C3"]), 0);

        assert_eq!(
            labels(&nav),
            vec!["Main Menu", "Settings", "C1", "C2", "C3", "Scan"]
        );
        assert_eq!(nav.active_index(), 5);
        assert_eq!(nav.focused().unwrap().label, "Scan");
        assert_eq!(nav.scroll(), 5.0 * 128.0);
    }

    #[test]
    fn test_focus_before_region_is_unchanged() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        nav.refresh(collections(&["C1", "C2", "C3"]), 0);
        assert_eq!(nav.active_index(), 0);

        nav.refresh(collections(&["C1"]), 0);
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.collection_count(), 1);
    }

    #[test]
    fn test_shrinking_region_keeps_focus_valid() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        nav.refresh(collections(&["A", "B", "C", "D"]), 0);
        focus(&mut nav, 4);

        nav.refresh(collections(&["A"]), 0);
        assert_eq!(labels(&nav), vec!["Main Menu", "Settings", "A", "Scan"]);
        assert_eq!(nav.active_index(), 2);
    }

    #[test]
    fn test_zero_discovered_entries() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        focus(&mut nav, 2);
        nav.refresh(Vec::new(), 0);
        assert_eq!(labels(&nav), vec!["Main Menu", "Settings", "Scan"]);
        assert_eq!(nav.active_index(), 2);
    }

    #[test]
    fn test_list_shorter_than_fixed_slots() {
        let mut nav = TabNavigator::new(vec![Entry::new("Only", "", "x")], &TabsConfig::default());
        nav.refresh(collections(&["C1", "C2"]), 0);
        assert_eq!(labels(&nav), vec!["Only", "C1", "C2"]);
        assert!(nav.active_index() < nav.len());

        let mut empty = TabNavigator::new(Vec::new(), &TabsConfig::default());
        empty.refresh(Vec::new(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.active_index(), 0);
    }

    #[test]
    fn test_refresh_snaps_and_cancels_tweens() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        nav.step(Direction::Right);
        nav.tick(0.05);
        assert!(nav.is_animating());

        nav.refresh(collections(&["C1", "C2"]), 0);
        assert!(!nav.is_animating());
        assert_eq!(nav.phase(), Phase::Idle);
        for (i, entry) in nav.entries().iter().enumerate() {
            let expected = if i == nav.active_index() { FOCUSED_WIDTH } else { UNFOCUSED_WIDTH };
            assert_eq!(entry.visuals().width, expected);
            assert_eq!(entry.visuals().margin, 0.0);
        }
    }

    #[test]
    fn test_new_entries_get_fresh_ids() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        let scan_id = nav.entries()[2].id();
        nav.refresh(collections(&["C1", "C2"]), 0);

        assert_eq!(nav.entries()[4].id(), scan_id);
        let mut ids: Vec<_> = nav.entries().iter().map(Entry::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(nav.scheduler.get(Slot::Scroll).is_none());
    }

    #[test]
    fn test_refresh_while_child_scene_is_pushed() {
        let mut nav = TabNavigator::new(fixed_entries(), &TabsConfig::default());
        let mut stack = SceneHistory::new();
        focus(&mut nav, 2);
        assert!(nav.activate(&mut stack));

        nav.refresh(collections(&["C1", "C2", "C3"]), 1);
        assert_eq!(nav.active_index(), 5);
        assert_eq!(nav.phase(), Phase::Leaving);
        assert_eq!(nav.scroll(), 5.0 * 128.0 + 680.0);
        assert_eq!(nav.entries()[5].visuals().margin, LEAVING_MARGIN);
        assert_eq!(nav.entries()[0].visuals().margin, 0.0);

        nav.segue_back();
        for _ in 0..30 {
            nav.tick(1.0 / 60.0);
        }
        assert_eq!(nav.entries()[5].visuals().margin, 0.0);
        assert_eq!(nav.scroll(), 5.0 * 128.0);
    }

    #[test]
    fn test_replacement_range_clamps() {
        assert_eq!(replacement_range(6, 2, 1), (2, 5));
        assert_eq!(replacement_range(3, 2, 1), (2, 2));
        assert_eq!(replacement_range(2, 2, 1), (2, 2));
        assert_eq!(replacement_range(1, 2, 1), (1, 1));
        assert_eq!(replacement_range(0, 2, 1), (0, 0));
    }
}
