//! chromedriver process management
//!
//! Either spawns the configured chromedriver binary for the lifetime of a run
//! or points at a WebDriver server someone else already started.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::core::config::DriverConfig;
use crate::core::{AisleError, Result};

const READY_POLL: Duration = Duration::from_millis(250);

/// A reachable WebDriver endpoint, possibly backed by a child process
pub struct WebDriverEndpoint {
    url: String,
    child: Option<Child>,
}

impl WebDriverEndpoint {
    /// Attach to an existing server without managing its lifetime
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            child: None,
        }
    }

    /// Start chromedriver or attach, depending on config
    pub async fn start(config: &DriverConfig) -> Result<Self> {
        if let Some(url) = &config.webdriver_url {
            info!(%url, "using external WebDriver server");
            return Ok(Self::external(url.clone()));
        }

        Self::spawn(
            &config.chromedriver_path,
            config.port,
            Duration::from_secs(config.connect_timeout_secs),
        )
        .await
    }

    /// Spawn chromedriver on `port` and wait until it accepts connections
    pub async fn spawn(binary: &Path, port: u16, timeout: Duration) -> Result<Self> {
        info!(binary = %binary.display(), port, "starting chromedriver");

        let child = Command::new(binary)
            .arg(format!("--port={}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AisleError::DriverNotFound(binary.display().to_string())
                } else {
                    AisleError::driver(format!("Failed to start chromedriver: {}", e))
                }
            })?;

        let mut endpoint = Self {
            url: format!("http://localhost:{}", port),
            child: Some(child),
        };

        if let Err(e) = wait_for_port(port, timeout).await {
            endpoint.shutdown().await;
            return Err(e);
        }

        debug!(url = %endpoint.url, "chromedriver ready");
        Ok(endpoint)
    }

    /// WebDriver URL to connect sessions to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether this endpoint owns a chromedriver process
    pub fn is_managed(&self) -> bool {
        self.child.is_some()
    }

    /// Stop the chromedriver process if we started it
    pub async fn shutdown(&mut self) {
        if let Some(mut child) = self.child.take() {
            info!("stopping chromedriver");
            if let Err(e) = child.kill().await {
                warn!(error = %e, "failed to stop chromedriver");
            }
        }
    }
}

async fn wait_for_port(port: u16, timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(AisleError::driver(format!(
                "chromedriver did not listen on port {} within {:?}",
                port, timeout
            )));
        }
        sleep(READY_POLL).await;
    }
}

/// Check if the chromedriver binary runs
pub async fn is_available(binary: &Path) -> bool {
    Command::new(binary)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}
