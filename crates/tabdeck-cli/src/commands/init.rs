use anyhow::{bail, Result};
use tracing::info;

use tabdeck_core::AppConfig;

/// Write the active configuration to the config file
pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }

    config.save()?;
    info!("Wrote configuration to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
