//! Shared types used across aisle modules
//!
//! Retailer identity, render plans and run summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Supported retailers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RetailerKind {
    Wegmans,
    #[value(name = "samsclub", alias = "sams")]
    #[serde(rename = "samsclub")]
    SamsClub,
}

impl RetailerKind {
    /// All retailers, in the order `scrape all` visits them
    pub const ALL: [RetailerKind; 2] = [RetailerKind::Wegmans, RetailerKind::SamsClub];

    /// Short machine name, used for config sections and snapshot files
    pub fn slug(&self) -> &'static str {
        match self {
            RetailerKind::Wegmans => "wegmans",
            RetailerKind::SamsClub => "samsclub",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            RetailerKind::Wegmans => "Wegmans",
            RetailerKind::SamsClub => "Sam's Club",
        }
    }
}

impl fmt::Display for RetailerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How long to keep scrolling a lazily loaded listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPolicy {
    /// Sleep after each scroll before re-measuring the page
    pub pause: Duration,
    /// Upper bound on scroll rounds; `None` scrolls until the height settles
    pub max_rounds: Option<u32>,
}

impl ScrollPolicy {
    /// Scroll until the page height stops changing
    pub fn until_stable(pause: Duration) -> Self {
        Self {
            pause,
            max_rounds: None,
        }
    }

    /// Scroll until stable or `rounds` scrolls, whichever comes first
    pub fn bounded(pause: Duration, rounds: u32) -> Self {
        Self {
            pause,
            max_rounds: Some(rounds),
        }
    }
}

/// Everything the browser needs to know to render one category page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// CSS selector whose presence means products have rendered
    pub ready_selector: String,
    /// Maximum time to wait for `ready_selector`
    pub wait: Duration,
    /// Lazy-load scrolling
    pub scroll: ScrollPolicy,
    /// Run without a visible window
    pub headless: bool,
}

/// Outcome of a scrape or parse run
#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    /// Retailer scraped
    pub retailer: RetailerKind,
    /// Number of category pages processed
    pub categories: usize,
    /// Number of rows written
    pub products: usize,
    /// CSV file written
    pub output: PathBuf,
}

impl fmt::Display for ScrapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved {} total products from {} categories to {}",
            self.products,
            self.categories,
            self.output.display()
        )
    }
}
