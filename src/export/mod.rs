//! Export module - writes scraped rows to disk

pub mod csv;

pub use self::csv::{write_csv, write_records};
