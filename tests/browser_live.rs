//! Live browser tests
//!
//! Need chromedriver on PATH (or AISLE_CHROMEDRIVER) plus network access to
//! the retailers. Run with `cargo test -- --ignored`.

use std::time::Duration;

use aisle::browser::{driver, BrowserExecutor, PageSource, WebDriverEndpoint};
use aisle::core::{Config, RenderPlan, ScrollPolicy};
use aisle::{Retailer, RetailerKind, SamsClub, Wegmans};
use tokio::time::timeout;

/// Start chromedriver from config, or explain why the test is skipped
async fn start_endpoint() -> Result<(WebDriverEndpoint, Config), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.apply_env()?;
    if config.driver.webdriver_url.is_none()
        && !driver::is_available(&config.driver.chromedriver_path).await
    {
        return Err("chromedriver not available".into());
    }
    let endpoint = WebDriverEndpoint::start(&config.driver).await?;
    Ok((endpoint, config))
}

/// Render a page that has no product grid: the wait times out, the page still comes back
#[tokio::test]
#[ignore] // Requires chromedriver
async fn test_wait_timeout_still_returns_html() {
    let (mut endpoint, _) = match start_endpoint().await {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    let executor = BrowserExecutor::new(endpoint.url());
    let plan = RenderPlan {
        ready_selector: "div.component--product-tile".to_string(),
        wait: Duration::from_secs(2),
        scroll: ScrollPolicy::bounded(Duration::from_millis(200), 2),
        headless: true,
    };

    let result = timeout(
        Duration::from_secs(60),
        executor.render("https://example.com", &plan),
    )
    .await;
    endpoint.shutdown().await;

    let html = result.expect("render timed out").expect("render failed");
    assert!(html.contains("Example Domain"));
    assert!(Wegmans::new().unwrap().parse(&html, "https://example.com").is_empty());
}

/// Full Wegmans category render
#[tokio::test]
#[ignore] // Requires chromedriver and network access
async fn test_wegmans_fruit_category() {
    let (mut endpoint, config) = match start_endpoint().await {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    let executor = BrowserExecutor::new(endpoint.url());
    let wegmans = Wegmans::new().unwrap();
    let settings = config.retailer(RetailerKind::Wegmans);
    let url = &settings.urls[0];

    let result = timeout(
        Duration::from_secs(180),
        executor.render(url, &settings.render_plan(wegmans.ready_selector())),
    )
    .await;
    endpoint.shutdown().await;

    match result {
        Ok(Ok(html)) => {
            let rows = wegmans.parse(&html, url);
            println!("Found {} products", rows.len());
            // Site markup drifts; a zero count is reported, not failed.
            if rows.is_empty() {
                eprintln!("No products extracted; selectors may be stale");
            }
        }
        Ok(Err(e)) => panic!("Render failed: {}", e),
        Err(_) => panic!("Render timed out"),
    }
}

/// Sam's Club in a visible window, capped scrolling
#[tokio::test]
#[ignore] // Requires chromedriver, a display and network access
async fn test_samsclub_pantry_category() {
    let (mut endpoint, config) = match start_endpoint().await {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    let executor = BrowserExecutor::new(endpoint.url());
    let sams = SamsClub::new().unwrap();
    let settings = config.retailer(RetailerKind::SamsClub);
    let url = &settings.urls[0];

    let result = timeout(
        Duration::from_secs(180),
        executor.render(url, &settings.render_plan(sams.ready_selector())),
    )
    .await;
    endpoint.shutdown().await;

    match result {
        Ok(Ok(html)) => {
            let rows = sams.parse(&html, url);
            println!("Found {} products", rows.len());
        }
        Ok(Err(e)) => eprintln!("Render error (acceptable behind bot checks): {}", e),
        Err(_) => eprintln!("Render timed out"),
    }
}
