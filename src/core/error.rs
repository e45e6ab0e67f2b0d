//! Custom error types for aisle
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for aisle operations
#[derive(Error, Debug)]
pub enum AisleError {
    /// chromedriver could not be started or never became reachable
    #[error("Driver error: {0}")]
    Driver(String),

    /// Browser automation errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// A WebDriver command failed
    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    /// A WebDriver session could not be created
    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A CSS selector failed to compile
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// A cleanup pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// chromedriver binary missing
    #[error("chromedriver not found at '{0}'. Install it or set AISLE_CHROMEDRIVER")]
    DriverNotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience Result type for aisle operations
pub type Result<T> = std::result::Result<T, AisleError>;

impl AisleError {
    /// Create a driver error
    pub fn driver(msg: impl Into<String>) -> Self {
        Self::Driver(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a selector error
    pub fn selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with additional context
    pub fn with_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_error_message() {
        let err = AisleError::selector("div..x", "unexpected token");
        assert_eq!(
            err.to_string(),
            "Invalid selector 'div..x': unexpected token"
        );
    }

    #[test]
    fn test_context_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AisleError::with_context("Failed to read snapshot", io);
        assert_eq!(err.to_string(), "Failed to read snapshot: gone");
        assert!(std::error::Error::source(&err).is_some());
    }
}
