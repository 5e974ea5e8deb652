//! Entries of the root tab strip

use std::path::Path;

use tabdeck_core::collection::file_stem;
use tabdeck_core::CollectionProvider;

use crate::entry::Entry;
use crate::scene::Command;
use crate::tabs::TabLayout;

/// Layout of the root strip: Main Menu and Settings first, Add games last
pub const ROOT_LAYOUT: TabLayout = TabLayout {
    prefix: 2,
    suffix: 1,
};

/// One tab per collection, in provider key order
pub fn collection_entries(provider: &dyn CollectionProvider) -> Vec<Entry> {
    provider
        .keys()
        .into_iter()
        .map(|key| {
            let count = provider.item_count(&key);
            Entry::new(
                provider.display_name(&key),
                format!("{} Games - 0 Favorites", count),
                file_stem(&key),
            )
            .with_command(Command::OpenCollection { path: key })
        })
        .collect()
}

/// The full root strip
pub fn root_entries(provider: &dyn CollectionProvider, scan_dir: &Path) -> Vec<Entry> {
    let mut entries = vec![
        Entry::new("Main Menu", "Load cores and games manually", "main")
            .with_command(Command::OpenMainMenu),
        Entry::new("Settings", "Configure the menu", "setting")
            .with_command(Command::OpenSettings),
    ];
    entries.extend(collection_entries(provider));
    entries.push(
        Entry::new("Add games", "Scan your collection", "add").with_command(
            Command::BrowseForScan {
                start_dir: scan_dir.to_path_buf(),
            },
        ),
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use tabdeck_core::collection::short_name;

    struct FakeProvider {
        counts: BTreeMap<PathBuf, usize>,
    }

    impl CollectionProvider for FakeProvider {
        fn load(&mut self) -> tabdeck_core::Result<()> {
            Ok(())
        }

        fn keys(&self) -> Vec<PathBuf> {
            self.counts.keys().cloned().collect()
        }

        fn display_name(&self, key: &Path) -> String {
            short_name(&file_stem(key))
        }

        fn item_count(&self, key: &Path) -> usize {
            self.counts.get(key).copied().unwrap_or(0)
        }
    }

    fn provider() -> FakeProvider {
        let mut counts = BTreeMap::new();
        counts.insert(PathBuf::from("/lists/Sega - Mega Drive.lpl"), 12);
        counts.insert(PathBuf::from("/lists/Nintendo - Game Boy.lpl"), 3);
        FakeProvider { counts }
    }

    #[test]
    fn test_root_entries_order() {
        let entries = root_entries(&provider(), Path::new("/roms"));
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Main Menu", "Settings", "Game Boy", "Mega Drive", "Add games"]
        );
        assert_eq!(
            entries[4].command(),
            Some(&Command::BrowseForScan {
                start_dir: PathBuf::from("/roms")
            })
        );
        assert_eq!(entries.len() - ROOT_LAYOUT.prefix - ROOT_LAYOUT.suffix, 2);
    }

    #[test]
    fn test_collection_entry_fields() {
        let entries = collection_entries(&provider());
        let mega_drive = &entries[1];
        assert_eq!(mega_drive.sub_label, "12 Games - 0 Favorites");
        assert_eq!(mega_drive.icon, "Sega - Mega Drive");
        assert_eq!(
            mega_drive.command(),
            Some(&Command::OpenCollection {
                path: PathBuf::from("/lists/Sega - Mega Drive.lpl")
            })
        );
    }

    #[test]
    fn test_empty_provider() {
        let empty = FakeProvider {
            counts: BTreeMap::new(),
        };
        assert!(collection_entries(&empty).is_empty());
        assert_eq!(root_entries(&empty, Path::new("/")).len(), 3);
    }
}
