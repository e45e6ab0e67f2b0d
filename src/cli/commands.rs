//! CLI command handlers

use crate::cli::args::{Command, ConfigAction, ParseArgs, ScrapeArgs, Target};
use crate::core::{AisleError, Config, Result, RetailerKind};
use crate::pipeline;

/// Run a parsed command against loaded configuration
pub async fn run(command: Command, mut config: Config) -> Result<()> {
    match command {
        Command::Scrape(args) => scrape(&args, &mut config).await,
        Command::Parse(args) => parse(&args, &config),
        Command::Retailers => {
            println!("{}", retailers_text(&config));
            Ok(())
        }
        Command::Config { action } => config_command(action, &config),
    }
}

async fn scrape(args: &ScrapeArgs, config: &mut Config) -> Result<()> {
    if args.target == Target::All && args.output.is_some() {
        return Err(AisleError::config(
            "--output needs a single retailer; set per-retailer outputs in the config file",
        ));
    }
    args.apply(config);

    let summaries = pipeline::scrape(config, &args.target.retailers()).await?;
    for summary in summaries {
        println!("✅ {}: {}", summary.retailer, summary);
    }
    Ok(())
}

fn parse(args: &ParseArgs, config: &Config) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.retailer(args.retailer).output.clone());

    let summary = pipeline::parse_file(args.retailer, &args.html, &args.url, &output)?;
    println!("✅ {}: {}", summary.retailer, summary);
    Ok(())
}

fn config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let text = toml::to_string_pretty(config)
                .map_err(|e| AisleError::config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", text);
        }
        ConfigAction::Init => {
            if Config::config_exists() {
                println!("Config already exists at {}", Config::config_file().display());
            } else {
                let path = Config::default().save()?;
                println!("Wrote default config to {}", path.display());
            }
        }
        ConfigAction::Path => println!("{}", Config::config_file().display()),
    }
    Ok(())
}

/// Human readable listing of retailers and where their rows go
pub fn retailers_text(config: &Config) -> String {
    RetailerKind::ALL
        .iter()
        .map(|kind| {
            let settings = config.retailer(*kind);
            let urls = settings
                .urls
                .iter()
                .map(|u| format!("    - {}", u))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "{} ({})\n  output:   {}\n  headless: {}\n  urls:\n{}",
                kind,
                kind.slug(),
                settings.output.display(),
                settings.headless,
                urls
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_retailers_text_lists_both() {
        let text = retailers_text(&Config::default());
        assert!(text.contains("Wegmans (wegmans)"));
        assert!(text.contains("Sam's Club (samsclub)"));
        assert!(text.contains("https://www.samsclub.com/browse/pantry/1532"));
    }

    #[tokio::test]
    async fn test_scrape_all_rejects_single_output() {
        let cli = crate::cli::Cli::parse_from(["aisle", "scrape", "all", "-o", "x.csv"]);
        let err = run(cli.command, Config::default()).await.unwrap_err();
        assert!(matches!(err, AisleError::Config(_)));
    }
}
