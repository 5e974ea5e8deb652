//! Content collections shown as tabs between the fixed menu entries.
//!
//! A collection is an ordered list of playable items discovered by the
//! scanner. The menu only needs the narrow [`CollectionProvider`] view of
//! them; [`CollectionLibrary`] is the directory-backed implementation.

mod library;

use std::path::{Path, PathBuf};

pub use library::{CollectionLibrary, COLLECTION_EXTENSION};

/// One playable item inside a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub path: PathBuf,
    pub name: String,
}

/// Read access to the set of known collections
pub trait CollectionProvider {
    /// Refresh the in-memory view from storage
    fn load(&mut self) -> crate::Result<()>;

    /// Collection keys, sorted lexicographically by source path
    fn keys(&self) -> Vec<PathBuf>;

    /// Human-readable name of a collection
    fn display_name(&self, key: &Path) -> String;

    /// Number of items in a collection (0 for unknown keys)
    fn item_count(&self, key: &Path) -> usize;
}

/// File name without directory and extension
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Drop the vendor prefix of a system name: "Nintendo - Game Boy" -> "Game Boy"
pub fn short_name(stem: &str) -> String {
    match stem.split_once(" - ") {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim().to_string(),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(
            file_stem(Path::new("/data/Nintendo - Game Boy.lpl")),
            "Nintendo - Game Boy"
        );
        assert_eq!(file_stem(Path::new("")), "");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Nintendo - Game Boy"), "Game Boy");
        assert_eq!(
            short_name("Sega - Mega Drive - Genesis"),
            "Mega Drive - Genesis"
        );
        assert_eq!(short_name("Homebrew"), "Homebrew");
        assert_eq!(short_name("Broken - "), "Broken - ");
    }
}
