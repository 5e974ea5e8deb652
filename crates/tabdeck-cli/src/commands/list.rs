use anyhow::Result;
use serde::Serialize;

use tabdeck_core::collection::file_stem;
use tabdeck_core::{AppConfig, CollectionLibrary, CollectionProvider};

#[derive(Serialize)]
struct CollectionSummary {
    name: String,
    system: String,
    items: usize,
    path: String,
}

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let library = CollectionLibrary::open(config.collections_dir())?;

    let summaries: Vec<CollectionSummary> = library
        .keys()
        .into_iter()
        .map(|key| CollectionSummary {
            name: library.display_name(&key),
            system: file_stem(&key),
            items: library.item_count(&key),
            path: key.display().to_string(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No collections yet.");
        println!("\nTo add games, run:");
        println!("  tabdeck scan <dir>");
        return Ok(());
    }

    println!("Collections ({}):\n", summaries.len());
    for summary in &summaries {
        println!("  {} - {} games", summary.name, summary.items);
        println!("    System: {}", summary.system);
        println!("    File: {}", summary.path);
        println!();
    }

    Ok(())
}
