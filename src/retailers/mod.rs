//! Retailer parsers
//!
//! Each retailer knows which element signals a rendered grid, how to pick
//! product tiles out of the final markup, and which CSV columns it emits.

mod samsclub;
mod wegmans;

pub use samsclub::{SamsClub, SamsClubProduct};
pub use wegmans::{Wegmans, WegmansProduct};

use serde::Serialize;

use crate::core::RetailerKind;

/// Turns a rendered category page into flat product rows
pub trait Retailer: Send + Sync {
    /// One CSV row
    type Record: Serialize + Send;

    /// Which retailer this is
    fn kind(&self) -> RetailerKind;

    /// CSS selector that appears once products have rendered
    fn ready_selector(&self) -> &'static str;

    /// CSV header, in record field order
    fn headers(&self) -> &'static [&'static str];

    /// Extract every qualifying product tile, in document order
    fn parse(&self, html: &str, category_url: &str) -> Vec<Self::Record>;
}
