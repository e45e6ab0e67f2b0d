//! aisle - grocery category prices to CSV
//!
//! Main entry point for the CLI application.

use aisle::cli::{self, Cli};
use aisle::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Build configuration
    let mut config = match &args.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };

    if args.debug {
        config.logging.debug = true;
    }

    cli::logging::init(&config.logging);

    cli::run(args.command, config).await?;
    Ok(())
}
