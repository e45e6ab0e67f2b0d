//! Extraction helpers shared by the retailer parsers

pub mod text;
pub mod units;

pub use text::{attr_of, compile, compile_chain, first_text, stripped_text};
pub use units::{Quantity, UnitSplitter};
