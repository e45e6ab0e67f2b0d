//! aisle - grocery category prices to CSV
//!
//! Drives Chrome over WebDriver to render Wegmans and Sam's Club category
//! pages, extracts product tiles from the final markup and writes one CSV
//! per retailer.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: chromedriver process, WebDriver sessions, scroll loop
//! - **Extract**: Selector lookups and price/size string splitting
//! - **Retailers**: Per-site tile parsers and CSV columns
//! - **Pipeline**: Sequential category aggregation
//! - **Export**: CSV writer
//! - **CLI**: Arguments, commands and logging setup
//!
//! # Usage
//!
//! ```rust,no_run
//! use aisle::{pipeline, Config, RetailerKind};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load().unwrap();
//!     let summaries = pipeline::scrape(&config, &[RetailerKind::Wegmans]).await.unwrap();
//!     for summary in summaries {
//!         println!("{}", summary);
//!     }
//! }
//! ```

pub mod browser;
pub mod cli;
pub mod core;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod retailers;

// Re-export commonly used items
pub use core::{AisleError, Config, Result, RetailerKind, ScrapeSummary};
pub use retailers::{Retailer, SamsClub, Wegmans};
