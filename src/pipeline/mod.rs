//! Pipeline module - render, extract, flatten
//!
//! Ties a page source, a retailer parser and the CSV writer together, and
//! offers the two entry points the CLI uses: live scraping and offline
//! re-parsing of saved pages.

pub mod aggregator;

pub use aggregator::{snapshot_file_name, Aggregator};

use std::fs;
use std::path::Path;

use tracing::info;

use crate::browser::{BrowserExecutor, PageSource, WebDriverEndpoint};
use crate::core::{AisleError, Config, Result, RetailerKind, ScrapeSummary};
use crate::export::write_csv;
use crate::retailers::{Retailer, SamsClub, Wegmans};

/// Scrape one retailer with an arbitrary page source
pub async fn scrape_with<S>(source: &S, config: &Config, kind: RetailerKind) -> Result<ScrapeSummary>
where
    S: PageSource + ?Sized,
{
    let settings = config.retailer(kind);
    settings.validate()?;
    let snapshot_dir = config.output.snapshot_dir.clone();

    match kind {
        RetailerKind::Wegmans => {
            let retailer = Wegmans::new()?;
            let plan = settings.render_plan(retailer.ready_selector());
            Aggregator::new(source, &retailer, plan)
                .with_snapshot_dir(snapshot_dir)
                .run(&settings.urls, &settings.output)
                .await
        }
        RetailerKind::SamsClub => {
            let retailer = SamsClub::new()?;
            let plan = settings.render_plan(retailer.ready_selector());
            Aggregator::new(source, &retailer, plan)
                .with_snapshot_dir(snapshot_dir)
                .run(&settings.urls, &settings.output)
                .await
        }
    }
}

/// Scrape the given retailers in a real browser, one after another
pub async fn scrape(config: &Config, kinds: &[RetailerKind]) -> Result<Vec<ScrapeSummary>> {
    let mut endpoint = WebDriverEndpoint::start(&config.driver).await?;

    let mut executor = BrowserExecutor::new(endpoint.url());
    executor.set_chrome_binary(config.driver.chrome_binary.clone());

    let mut summaries = Vec::with_capacity(kinds.len());
    let mut outcome = Ok(());
    for kind in kinds {
        match scrape_with(&executor, config, *kind).await {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    endpoint.shutdown().await;
    outcome.map(|_| summaries)
}

/// Re-extract a saved page without a browser
pub fn parse_file(
    kind: RetailerKind,
    html_path: &Path,
    category_url: &str,
    output: &Path,
) -> Result<ScrapeSummary> {
    let html = fs::read_to_string(html_path).map_err(|e| {
        AisleError::with_context(format!("Failed to read {}", html_path.display()), e)
    })?;

    let products = match kind {
        RetailerKind::Wegmans => parse_and_write(&Wegmans::new()?, &html, category_url, output)?,
        RetailerKind::SamsClub => parse_and_write(&SamsClub::new()?, &html, category_url, output)?,
    };

    let summary = ScrapeSummary {
        retailer: kind,
        categories: 1,
        products,
        output: output.to_path_buf(),
    };
    info!("{}", summary);
    Ok(summary)
}

fn parse_and_write<R: Retailer>(
    retailer: &R,
    html: &str,
    category_url: &str,
    output: &Path,
) -> Result<usize> {
    let records = retailer.parse(html, category_url);
    write_csv(output, retailer.headers(), &records)?;
    Ok(records.len())
}
