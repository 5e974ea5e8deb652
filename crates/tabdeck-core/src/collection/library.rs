use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{file_stem, short_name, CollectionItem, CollectionProvider};
use crate::{Error, Result};

/// Extension of collection files inside the library directory
pub const COLLECTION_EXTENSION: &str = "lpl";

/// Directory-backed collection store
///
/// Every `*.lpl` file in the directory is one collection. Each non-empty line
/// is `path<TAB>name`; a line without a tab uses the file stem as the name.
#[derive(Debug, Clone)]
pub struct CollectionLibrary {
    dir: PathBuf,
    collections: BTreeMap<PathBuf, Vec<CollectionItem>>,
}

impl CollectionLibrary {
    /// Create an empty library rooted at `dir`. Call [`CollectionProvider::load`] to read it.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            collections: BTreeMap::new(),
        }
    }

    /// Create a library and load it right away
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let mut library = Self::new(dir);
        library.load()?;
        Ok(library)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Items of one collection
    pub fn items(&self, key: &Path) -> Result<&[CollectionItem]> {
        self.collections
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::CollectionNotFound(key.to_path_buf()))
    }

    /// Path of the collection file called `name` inside `dir`
    pub fn collection_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, COLLECTION_EXTENSION))
    }

    /// Append items whose path is not in the collection yet
    ///
    /// Creates the directory and the collection file when missing. Paths that
    /// cannot be written as one line of the file are skipped with a warning.
    /// Returns the number of items actually added.
    pub fn merge(dir: &Path, name: &str, items: &[CollectionItem]) -> Result<usize> {
        std::fs::create_dir_all(dir)?;
        let path = Self::collection_path(dir, name);

        let mut existing = if path.exists() {
            parse_collection(&std::fs::read_to_string(&path)?)
        } else {
            Vec::new()
        };

        let mut seen: HashSet<PathBuf> = existing.iter().map(|item| item.path.clone()).collect();
        let before = existing.len();
        for item in items {
            if !is_storable(&item.path) {
                warn!("Skipping {:?}: path cannot be stored in a collection", item.path);
                continue;
            }
            if seen.insert(item.path.clone()) {
                existing.push(CollectionItem {
                    path: item.path.clone(),
                    name: sanitize_name(&item.name),
                });
            }
        }

        let added = existing.len() - before;
        if added > 0 {
            std::fs::write(&path, format_collection(&existing))?;
            debug!("Added {} items to {}", added, path.display());
        }

        Ok(added)
    }
}

impl CollectionProvider for CollectionLibrary {
    fn load(&mut self) -> Result<()> {
        self.collections.clear();

        if !self.dir.exists() {
            debug!("Collection directory {} does not exist yet", self.dir.display());
            return Ok(());
        }

        for dir_entry in std::fs::read_dir(&self.dir)? {
            let path = dir_entry?.path();
            let is_collection = path
                .extension()
                .map(|ext| ext == COLLECTION_EXTENSION)
                .unwrap_or(false);
            if !is_collection || !path.is_file() {
                continue;
            }

            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    self.collections.insert(path, parse_collection(&content));
                }
                Err(e) => warn!("Skipping unreadable collection {}: {}", path.display(), e),
            }
        }

        debug!("Loaded {} collections from {}", self.collections.len(), self.dir.display());
        Ok(())
    }

    fn keys(&self) -> Vec<PathBuf> {
        // BTreeMap iteration is already ordered by path
        self.collections.keys().cloned().collect()
    }

    fn display_name(&self, key: &Path) -> String {
        short_name(&file_stem(key))
    }

    fn item_count(&self, key: &Path) -> usize {
        self.collections.get(key).map(Vec::len).unwrap_or(0)
    }
}

fn parse_collection(content: &str) -> Vec<CollectionItem> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((path, name)) => CollectionItem {
                path: PathBuf::from(path),
                name: name.to_string(),
            },
            None => {
                let path = PathBuf::from(line);
                CollectionItem {
                    name: file_stem(&path),
                    path,
                }
            }
        })
        .collect()
}

/// A path round-trips only if it is UTF-8 and free of field and line separators
fn is_storable(path: &Path) -> bool {
    path.to_str()
        .map(|s| !s.is_empty() && !s.contains(['\t', '\n', '\r']))
        .unwrap_or(false)
}

fn sanitize_name(name: &str) -> String {
    name.replace(['\t', '\n', '\r'], " ")
}

fn format_collection(items: &[CollectionItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.path.to_string_lossy());
        out.push('\t');
        out.push_str(&item.name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str) -> CollectionItem {
        let path = PathBuf::from(path);
        CollectionItem {
            name: file_stem(&path),
            path,
        }
    }

    #[test]
    fn test_parse_collection_lines() {
        let items = parse_collection("/roms/a.gb\tAlpha\n\n/roms/b.gb\n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Alpha");
        assert_eq!(items[1].name, "b");
        assert_eq!(items[1].path, PathBuf::from("/roms/b.gb"));
    }

    #[test]
    fn test_missing_directory_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let library = CollectionLibrary::open(tmp.path().join("missing")).unwrap();
        assert!(library.is_empty());
        assert!(library.keys().is_empty());
    }

    #[test]
    fn test_keys_sorted_and_counted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        CollectionLibrary::merge(dir, "Sega - Master System", &[item("/r/x.sms")]).unwrap();
        CollectionLibrary::merge(dir, "Nintendo - Game Boy", &[item("/r/a.gb"), item("/r/b.gb")])
            .unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let library = CollectionLibrary::open(dir).unwrap();
        let keys = library.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys[0] < keys[1]);
        assert_eq!(library.display_name(&keys[0]), "Game Boy");
        assert_eq!(library.item_count(&keys[0]), 2);
        assert_eq!(library.item_count(&keys[1]), 1);
        assert_eq!(library.item_count(Path::new("/nope.lpl")), 0);
    }

    #[test]
    fn test_merge_skips_known_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let added = CollectionLibrary::merge(dir, "Homebrew", &[item("/r/a.nes"), item("/r/b.nes")])
            .unwrap();
        assert_eq!(added, 2);

        let added = CollectionLibrary::merge(dir, "Homebrew", &[item("/r/b.nes"), item("/r/c.nes")])
            .unwrap();
        assert_eq!(added, 1);

        let library = CollectionLibrary::open(dir).unwrap();
        let key = CollectionLibrary::collection_path(dir, "Homebrew");
        assert_eq!(library.items(&key).unwrap().len(), 3);
    }

    #[test]
    fn test_merge_skips_paths_that_break_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let items = [
            item("/r/tab\there.gb"),
            item("/r/new\nline.gb"),
            CollectionItem {
                path: PathBuf::from("/r/ok.gb"),
                name: "Two\nLines".to_string(),
            },
        ];
        let added = CollectionLibrary::merge(dir, "Game Boy", &items).unwrap();
        assert_eq!(added, 1);

        let library = CollectionLibrary::open(dir).unwrap();
        let key = CollectionLibrary::collection_path(dir, "Game Boy");
        let stored = library.items(&key).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].path, PathBuf::from("/r/ok.gb"));
        assert_eq!(stored[0].name, "Two Lines");
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_skips_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = PathBuf::from(OsStr::from_bytes(b"/r/\xff.gb"));
        let items = [CollectionItem {
            path,
            name: "broken".to_string(),
        }];
        assert_eq!(CollectionLibrary::merge(tmp.path(), "Game Boy", &items).unwrap(), 0);
        assert!(!CollectionLibrary::collection_path(tmp.path(), "Game Boy").exists());
    }

    #[test]
    fn test_items_unknown_key() {
        let library = CollectionLibrary::new("/does/not/matter");
        let err = library.items(Path::new("/x.lpl")).unwrap_err();
        assert!(matches!(err, Error::CollectionNotFound(_)));
    }
}
