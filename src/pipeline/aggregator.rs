//! Category aggregator
//!
//! Visits category URLs one after another, extracts each page and writes the
//! combined rows to a single CSV.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::browser::PageSource;
use crate::core::{AisleError, RenderPlan, Result, ScrapeSummary};
use crate::export::write_csv;
use crate::retailers::Retailer;

/// Sequential scrape of one retailer's categories
pub struct Aggregator<'a, S: ?Sized, R> {
    source: &'a S,
    retailer: &'a R,
    plan: RenderPlan,
    snapshot_dir: Option<PathBuf>,
}

impl<'a, S, R> Aggregator<'a, S, R>
where
    S: PageSource + ?Sized,
    R: Retailer,
{
    /// Create an aggregator over a page source and a retailer parser
    pub fn new(source: &'a S, retailer: &'a R, plan: RenderPlan) -> Self {
        Self {
            source,
            retailer,
            plan,
            snapshot_dir: None,
        }
    }

    /// Also keep every rendered page under `dir`
    pub fn with_snapshot_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.snapshot_dir = dir;
        self
    }

    /// Render and parse every URL, in order
    pub async fn collect(&self, urls: &[String]) -> Result<Vec<R::Record>> {
        let mut all = Vec::new();

        for (index, url) in urls.iter().enumerate() {
            info!(retailer = %self.retailer.kind(), %url, "loading category");
            let html = self.source.render(url, &self.plan).await?;

            if let Some(dir) = &self.snapshot_dir {
                let path = self.save_snapshot(dir, index, url, &html)?;
                debug!(path = %path.display(), "saved snapshot");
            }

            info!("extracting products");
            let products = self.retailer.parse(&html, url);
            info!(count = products.len(), %url, "found products");
            all.extend(products);
        }

        Ok(all)
    }

    /// Scrape every URL and write the CSV
    pub async fn run(&self, urls: &[String], output: &Path) -> Result<ScrapeSummary> {
        let records = self.collect(urls).await?;
        write_csv(output, self.retailer.headers(), &records)?;

        let summary = ScrapeSummary {
            retailer: self.retailer.kind(),
            categories: urls.len(),
            products: records.len(),
            output: output.to_path_buf(),
        };
        info!("{}", summary);
        Ok(summary)
    }

    fn save_snapshot(&self, dir: &Path, index: usize, url: &str, html: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(snapshot_file_name(self.retailer.kind().slug(), index, url));
        fs::write(&path, html)
            .map_err(|e| AisleError::with_context(format!("Failed to write {}", path.display()), e))?;
        Ok(path)
    }
}

/// `<retailer>-<position>-<last path segment>.html`, e.g. `wegmans-01-2957350.html`
///
/// `index` is the URL's zero-based position in the run, so two categories
/// ending in the same segment still get distinct files.
pub fn snapshot_file_name(slug: &str, index: usize, url: &str) -> String {
    let segment = url::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segs| segs.rfind(|s| !s.is_empty()).map(str::to_string))
        })
        .unwrap_or_else(|| "page".to_string());

    let clean: String = segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    format!("{}-{:02}-{}.html", slug, index + 1, clean)
}
