//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{Config, RetailerKind};

/// aisle - grocery category prices to CSV
#[derive(Parser, Debug)]
#[command(name = "aisle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render category pages in Chrome and write a CSV per retailer
    Scrape(ScrapeArgs),

    /// Extract products from a saved page without a browser
    Parse(ParseArgs),

    /// List retailers with their category URLs and output files
    Retailers,

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Which retailers to scrape
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Wegmans,
    #[value(alias = "sams")]
    Samsclub,
    All,
}

impl Target {
    pub fn retailers(&self) -> Vec<RetailerKind> {
        match self {
            Target::Wegmans => vec![RetailerKind::Wegmans],
            Target::Samsclub => vec![RetailerKind::SamsClub],
            Target::All => RetailerKind::ALL.to_vec(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Retailer to scrape
    #[arg(value_enum)]
    pub target: Target,

    /// Category URL; repeat to replace the configured list
    #[arg(long = "url", short = 'u')]
    pub urls: Vec<String>,

    /// Output CSV path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Show the browser window
    #[arg(long, conflicts_with = "headless")]
    pub headed: bool,

    /// Hide the browser window
    #[arg(long)]
    pub headless: bool,

    /// Path to the chromedriver binary
    #[arg(long)]
    pub driver: Option<PathBuf>,

    /// Use a running WebDriver server instead of starting chromedriver
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Save every rendered page into this directory
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Retailer the page came from
    #[arg(value_enum)]
    pub retailer: RetailerKind,

    /// Saved HTML file
    pub html: PathBuf,

    /// Category URL the page was loaded from
    #[arg(long)]
    pub url: String,

    /// Output CSV path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init,
    /// Print the config file location
    Path,
}

impl ScrapeArgs {
    /// Apply CLI overrides on top of loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(driver) = &self.driver {
            config.driver.chromedriver_path = driver.clone();
        }
        if let Some(url) = &self.webdriver_url {
            config.driver.webdriver_url = Some(url.clone());
        }
        if let Some(dir) = &self.snapshot_dir {
            config.output.snapshot_dir = Some(dir.clone());
        }

        for kind in self.target.retailers() {
            let retailer = config.retailer_mut(kind);
            if !self.urls.is_empty() {
                retailer.urls = self.urls.clone();
            }
            if let Some(output) = &self.output {
                retailer.output = output.clone();
            }
            if self.headed {
                retailer.headless = false;
            }
            if self.headless {
                retailer.headless = true;
            }
        }
    }
}
