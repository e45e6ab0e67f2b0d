//! Core module - shared infrastructure for aisle
//!
//! This module contains foundational types, configuration, and error handling
//! used throughout the application.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, RetailerConfig};
pub use error::{AisleError, Result};
pub use types::*;
