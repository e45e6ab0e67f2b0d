//! Configuration management for aisle
//!
//! Supports environment variables, config files, and runtime overrides.
//! Category URLs and output paths live here instead of in source.
//!
//! Config file location: ~/.config/aisle/config.toml

use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{AisleError, Result};
use crate::core::types::{RenderPlan, RetailerKind, ScrollPolicy};

/// Environment variables that override file and default settings
pub const ENV_CHROMEDRIVER: &str = "AISLE_CHROMEDRIVER";
pub const ENV_CHROMEDRIVER_PORT: &str = "AISLE_CHROMEDRIVER_PORT";
pub const ENV_WEBDRIVER_URL: &str = "AISLE_WEBDRIVER_URL";
pub const ENV_CHROME_BINARY: &str = "AISLE_CHROME_BINARY";
pub const ENV_DEBUG: &str = "AISLE_DEBUG";
pub const ENV_SNAPSHOT_DIR: &str = "AISLE_SNAPSHOT_DIR";

/// Main configuration for aisle
///
/// Every section may be omitted from the file; missing sections and fields
/// fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// chromedriver / WebDriver configuration
    pub driver: DriverConfig,
    /// Wegmans category scrape
    #[serde(deserialize_with = "deserialize_wegmans")]
    pub wegmans: RetailerConfig,
    /// Sam's Club category scrape
    #[serde(deserialize_with = "deserialize_samsclub")]
    pub samsclub: RetailerConfig,
    /// Output extras
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// WebDriver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Path to the chromedriver binary
    pub chromedriver_path: PathBuf,
    /// Port chromedriver listens on when we spawn it
    pub port: u16,
    /// Use an already running WebDriver server instead of spawning one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webdriver_url: Option<String>,
    /// Chrome binary override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_binary: Option<PathBuf>,
    /// How long to wait for chromedriver to accept connections
    pub connect_timeout_secs: u64,
}

/// Per-retailer scrape settings
#[derive(Debug, Clone, Serialize)]
pub struct RetailerConfig {
    /// Category listing pages, visited in order
    pub urls: Vec<String>,
    /// CSV file to write
    pub output: PathBuf,
    /// Run Chrome without a window
    pub headless: bool,
    /// Seconds to wait for the product grid to appear
    pub wait_secs: u64,
    /// Pause after each scroll in milliseconds
    pub scroll_pause_ms: u64,
    /// Maximum scroll rounds; unset scrolls until the page stops growing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scrolls: Option<u32>,
}

/// A retailer section as written in the file, any field may be absent
#[derive(Debug, Deserialize)]
struct RetailerSection {
    urls: Option<Vec<String>>,
    output: Option<PathBuf>,
    headless: Option<bool>,
    wait_secs: Option<u64>,
    scroll_pause_ms: Option<u64>,
    max_scrolls: Option<u32>,
}

impl RetailerSection {
    fn over_defaults(self, kind: RetailerKind) -> RetailerConfig {
        let base = RetailerConfig::defaults_for(kind);
        RetailerConfig {
            urls: self.urls.unwrap_or(base.urls),
            output: self.output.unwrap_or(base.output),
            headless: self.headless.unwrap_or(base.headless),
            wait_secs: self.wait_secs.unwrap_or(base.wait_secs),
            scroll_pause_ms: self.scroll_pause_ms.unwrap_or(base.scroll_pause_ms),
            max_scrolls: self.max_scrolls.or(base.max_scrolls),
        }
    }
}

fn deserialize_wegmans<'de, D>(deserializer: D) -> std::result::Result<RetailerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    RetailerSection::deserialize(deserializer).map(|s| s.over_defaults(RetailerKind::Wegmans))
}

fn deserialize_samsclub<'de, D>(deserializer: D) -> std::result::Result<RetailerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    RetailerSection::deserialize(deserializer).map(|s| s.over_defaults(RetailerKind::SamsClub))
}

/// Output extras
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Save each rendered page here for offline re-parsing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbose output
    pub debug: bool,
    /// tracing filter used when RUST_LOG is unset
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver: DriverConfig::default(),
            wegmans: RetailerConfig::defaults_for(RetailerKind::Wegmans),
            samsclub: RetailerConfig::defaults_for(RetailerKind::SamsClub),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            chromedriver_path: PathBuf::from("chromedriver"),
            port: 9515,
            webdriver_url: None,
            chrome_binary: None,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            filter: "info".to_string(),
        }
    }
}

impl RetailerConfig {
    /// Built-in settings for a retailer
    pub fn defaults_for(kind: RetailerKind) -> Self {
        match kind {
            RetailerKind::Wegmans => Self {
                urls: [
                    "https://www.wegmans.com/shop/categories/2957350", // Fruit
                    "https://www.wegmans.com/shop/categories/2957333", // Vegetables
                    "https://www.wegmans.com/shop/categories/2957104", // Chicken
                    "https://www.wegmans.com/shop/categories/2957425", // Butter
                    "https://www.wegmans.com/shop/categories/2957426", // Cheese
                    "https://www.wegmans.com/shop/categories/2957472", // Baking
                ]
                .iter()
                .map(|u| u.to_string())
                .collect(),
                output: PathBuf::from("data/interim/wegmans_multi_prices.csv"),
                headless: true,
                wait_secs: 20,
                scroll_pause_ms: 1500,
                max_scrolls: None,
            },
            RetailerKind::SamsClub => Self {
                urls: vec!["https://www.samsclub.com/browse/pantry/1532".to_string()],
                output: PathBuf::from("data/interim/samsclub_prices.csv"),
                headless: false,
                wait_secs: 20,
                scroll_pause_ms: 1000,
                max_scrolls: Some(8),
            },
        }
    }

    /// Scroll policy derived from the pause and cap
    pub fn scroll_policy(&self) -> ScrollPolicy {
        let pause = Duration::from_millis(self.scroll_pause_ms);
        match self.max_scrolls {
            Some(rounds) => ScrollPolicy::bounded(pause, rounds),
            None => ScrollPolicy::until_stable(pause),
        }
    }

    /// Render plan for pages of this retailer
    pub fn render_plan(&self, ready_selector: &str) -> RenderPlan {
        RenderPlan {
            ready_selector: ready_selector.to_string(),
            wait: Duration::from_secs(self.wait_secs),
            scroll: self.scroll_policy(),
            headless: self.headless,
        }
    }

    /// Reject URLs that would never load
    pub fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(AisleError::config("No category URLs configured"));
        }
        for raw in &self.urls {
            let parsed = url::Url::parse(raw)
                .map_err(|e| AisleError::config(format!("Invalid URL '{}': {}", raw, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AisleError::config(format!(
                    "Unsupported URL scheme in '{}'",
                    raw
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aisle")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    ///
    /// A missing config file means defaults; a config file that exists but
    /// does not parse is an error.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = Self::config_file();
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then apply env overrides
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AisleError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AisleError::config(format!("Failed to read config: {}", e)))?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            AisleError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AisleError::config(format!("Failed to parse config: {}", e)))
    }

    /// Override settings from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Override settings from any variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CHROMEDRIVER) {
            self.driver.chromedriver_path = PathBuf::from(path);
        }
        if let Some(port) = lookup(ENV_CHROMEDRIVER_PORT) {
            self.driver.port = port.trim().parse().map_err(|_| {
                AisleError::config(format!("{} is not a port: {}", ENV_CHROMEDRIVER_PORT, port))
            })?;
        }
        if let Some(url) = lookup(ENV_WEBDRIVER_URL) {
            self.driver.webdriver_url = Some(url);
        }
        if let Some(binary) = lookup(ENV_CHROME_BINARY) {
            self.driver.chrome_binary = Some(PathBuf::from(binary));
        }
        if let Some(debug) = lookup(ENV_DEBUG) {
            self.logging.debug = debug == "true" || debug == "1";
        }
        if let Some(dir) = lookup(ENV_SNAPSHOT_DIR) {
            self.output.snapshot_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| AisleError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AisleError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| AisleError::config(format!("Failed to write config: {}", e)))?;

        Ok(config_path)
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Settings for one retailer
    pub fn retailer(&self, kind: RetailerKind) -> &RetailerConfig {
        match kind {
            RetailerKind::Wegmans => &self.wegmans,
            RetailerKind::SamsClub => &self.samsclub,
        }
    }

    /// Mutable settings for one retailer
    pub fn retailer_mut(&mut self, kind: RetailerKind) -> &mut RetailerConfig {
        match kind {
            RetailerKind::Wegmans => &mut self.wegmans,
            RetailerKind::SamsClub => &mut self.samsclub,
        }
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
