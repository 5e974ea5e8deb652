use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;

use tabdeck_core::scanner::{self, ScanEvent};
use tabdeck_core::AppConfig;

/// Scan a directory without the menu and print what was added
pub async fn run(config: &AppConfig, path: PathBuf) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    println!("Scanning {}...", path.display());

    scanner::spawn_scan(
        path,
        config.collections_dir(),
        config.library.extensions.clone(),
        tx,
    );

    match rx.recv().await {
        Some(ScanEvent::Finished(report)) => {
            println!(
                "Found {} files, {} new.",
                report.files_seen, report.added
            );
            for name in &report.collections {
                println!("  {}", name);
            }
            Ok(())
        }
        Some(ScanEvent::Failed { error, .. }) => Err(anyhow!("Scan failed: {}", error)),
        None => Err(anyhow!("Scan task ended without reporting")),
    }
}
