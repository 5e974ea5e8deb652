//! Directory scanner that feeds the collection library.
//!
//! Scanning walks a directory tree, keeps files with an accepted extension,
//! groups them by the system their extension belongs to and merges each group
//! into the matching collection file. The menu never waits on a scan: it is
//! spawned on tokio's blocking pool and reports back over a channel.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::collection::{file_stem, CollectionItem, CollectionLibrary};
use crate::{Error, Result};

/// Summary of a finished scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub root: PathBuf,
    /// Accepted files found under the root
    pub files_seen: usize,
    /// Files that were not in their collection before
    pub added: usize,
    /// Names of the collections that received files
    pub collections: Vec<String>,
}

/// Completion notice sent by [`spawn_scan`]
#[derive(Debug, Clone)]
pub enum ScanEvent {
    Finished(ScanReport),
    Failed { root: PathBuf, error: String },
}

/// Collection name for a file extension
pub fn system_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "nes" => "Nintendo - Nintendo Entertainment System",
        "sfc" | "smc" => "Nintendo - Super Nintendo Entertainment System",
        "gb" => "Nintendo - Game Boy",
        "gbc" => "Nintendo - Game Boy Color",
        "gba" => "Nintendo - Game Boy Advance",
        "n64" | "z64" => "Nintendo - Nintendo 64",
        "md" | "gen" => "Sega - Mega Drive - Genesis",
        "sms" => "Sega - Master System - Mark III",
        "gg" => "Sega - Game Gear",
        "pce" => "NEC - PC Engine - TurboGrafx 16",
        _ => "Misc - Unsorted",
    }
}

/// Scan `root` and merge what was found into the library at `library_dir`
pub fn scan_dir(root: &Path, library_dir: &Path, extensions: &[String]) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(Error::Scan(format!("{} is not a directory", root.display())));
    }

    let files = collect_files(root, extensions)?;
    debug!("Found {} candidate files under {}", files.len(), root.display());

    let mut groups: BTreeMap<&'static str, Vec<CollectionItem>> = BTreeMap::new();
    for path in &files {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        groups
            .entry(system_for_extension(&ext))
            .or_default()
            .push(CollectionItem {
                name: file_stem(path),
                path: path.clone(),
            });
    }

    let mut report = ScanReport {
        root: root.to_path_buf(),
        files_seen: files.len(),
        ..Default::default()
    };

    for (system, items) in groups {
        report.added += CollectionLibrary::merge(library_dir, system, &items)?;
        report.collections.push(system.to_string());
    }

    Ok(report)
}

/// Run [`scan_dir`] in the background and report the outcome on `tx`
pub fn spawn_scan(
    root: PathBuf,
    library_dir: PathBuf,
    extensions: Vec<String>,
    tx: mpsc::UnboundedSender<ScanEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let scan_root = root.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            scan_dir(&scan_root, &library_dir, &extensions)
        })
        .await
        .map_err(|e| Error::Scan(e.to_string()))
        .and_then(|result| result);

        let event = match outcome {
            Ok(report) => {
                info!(
                    "Scan of {} finished: {} files, {} new",
                    report.root.display(),
                    report.files_seen,
                    report.added
                );
                ScanEvent::Finished(report)
            }
            Err(e) => {
                warn!("Scan of {} failed: {}", root.display(), e);
                ScanEvent::Failed {
                    root,
                    error: e.to_string(),
                }
            }
        };

        if tx.send(event).is_err() {
            warn!("Failed to send scan event: receiver dropped");
        }
    })
}

fn collect_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    // Symlinks are not followed, so a link back up the tree is never re-entered
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself must be readable, nested directories may not be
            Err(e) if e.depth() > 0 => {
                warn!("Skipping entry under {}: {}", root.display(), e);
                continue;
            }
            Err(e) => return Err(Error::Scan(e.to_string())),
        };

        if entry.file_type().is_file() && is_accepted(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_accepted(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}
