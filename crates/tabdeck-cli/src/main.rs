use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tabdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "tabdeck")]
#[command(author, version, about = "A console-style tab menu for your game collections")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the menu
    Run,
    /// List known collections
    List {
        /// Print the collections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan a directory for games and add them to the collections
    Scan {
        /// Directory to scan
        path: PathBuf,
    },
    /// Write the configuration file with every setting filled in
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The menu owns the terminal, so its logs go to a file
    let log_to_file = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, log_to_file)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::List { json }) => commands::list::run(&config, json),
        Some(Commands::Scan { path }) => commands::scan::run(&config, path).await,
        Some(Commands::Init { force }) => commands::init::run(&config, force),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
