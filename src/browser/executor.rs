//! Browser executor - drives Chrome through WebDriver
//!
//! Every page gets a fresh session: open, wait for the product grid, scroll
//! until nothing new loads, grab the markup, close.

use std::path::PathBuf;

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::browser::scroll::scroll_until_stable;
use crate::browser::traits::{PageSource, Scrollable};
use crate::core::{AisleError, RenderPlan, Result};

const HEIGHT_SCRIPT: &str = "return document.body.scrollHeight";
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Renders pages in Chrome via a WebDriver server
pub struct BrowserExecutor {
    /// WebDriver server to open sessions on
    webdriver_url: String,
    /// Chrome binary override
    chrome_binary: Option<PathBuf>,
}

impl BrowserExecutor {
    /// Create a new browser executor
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            chrome_binary: None,
        }
    }

    /// Use a specific Chrome binary
    pub fn set_chrome_binary(&mut self, binary: Option<PathBuf>) {
        self.chrome_binary = binary;
    }

    /// WebDriver capabilities for a Chrome session
    pub fn capabilities(&self, headless: bool) -> Map<String, Value> {
        let mut args = Vec::new();
        if headless {
            args.push("--headless=new");
        }
        args.push("--no-sandbox");
        args.push("--disable-dev-shm-usage");

        let mut chrome_options = json!({ "args": args });
        if let Some(binary) = &self.chrome_binary {
            chrome_options["binary"] = Value::String(binary.display().to_string());
        }

        let mut caps = Map::new();
        caps.insert("goog:chromeOptions".to_string(), chrome_options);
        caps
    }

    async fn connect(&self, headless: bool) -> Result<Client> {
        let client = ClientBuilder::native()
            .capabilities(self.capabilities(headless))
            .connect(&self.webdriver_url)
            .await?;
        Ok(client)
    }

    async fn load_and_settle(&self, client: &Client, url: &str, plan: &RenderPlan) -> Result<String> {
        client.goto(url).await?;

        match client
            .wait()
            .at_most(plan.wait)
            .for_element(Locator::Css(&plan.ready_selector))
            .await
        {
            Ok(_) => debug!(selector = %plan.ready_selector, "products rendered"),
            Err(e) => warn!(%url, error = %e, "timeout waiting for products"),
        }

        let page = ClientPage { client };
        let rounds = scroll_until_stable(&page, &plan.scroll).await?;
        debug!(%url, rounds, "finished scrolling");

        Ok(client.source().await?)
    }
}

#[async_trait]
impl PageSource for BrowserExecutor {
    async fn render(&self, url: &str, plan: &RenderPlan) -> Result<String> {
        info!(%url, headless = plan.headless, "opening browser session");
        let client = self.connect(plan.headless).await?;

        let result = self.load_and_settle(&client, url, plan).await;

        if let Err(e) = client.close().await {
            warn!(error = %e, "failed to close browser session");
        }
        result
    }
}

/// The open tab of a WebDriver session
struct ClientPage<'a> {
    client: &'a Client,
}

#[async_trait]
impl Scrollable for ClientPage<'_> {
    async fn page_height(&self) -> Result<u64> {
        let value = self.client.execute(HEIGHT_SCRIPT, vec![]).await?;
        value
            .as_u64()
            .or_else(|| value.as_f64().map(|h| h as u64))
            .ok_or_else(|| AisleError::browser(format!("Unexpected page height: {}", value)))
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.client.execute(SCROLL_SCRIPT, vec![]).await?;
        Ok(())
    }
}
