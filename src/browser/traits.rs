//! Seams between the scrape pipeline and a real browser
//!
//! The aggregator only needs rendered markup, and the scroll loop only needs
//! a page it can measure and scroll. Both are traits so they can be driven
//! by fixtures.

use async_trait::async_trait;

use crate::core::{RenderPlan, Result};

/// Something that can turn a URL into fully rendered HTML
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Load `url`, let it settle according to `plan`, return the page source
    async fn render(&self, url: &str, plan: &RenderPlan) -> Result<String>;
}

/// A live page that grows as it is scrolled
#[async_trait]
pub trait Scrollable: Send + Sync {
    /// Current `document.body.scrollHeight`
    async fn page_height(&self) -> Result<u64>;

    /// Jump to the bottom of the document
    async fn scroll_to_bottom(&self) -> Result<()>;
}
