//! Wegmans category listings

use scraper::{Html, Selector};
use serde::Serialize;

use crate::core::{Result, RetailerKind};
use crate::extract::{attr_of, compile, compile_chain, first_text};
use crate::retailers::Retailer;

const TILE: &str = "div.component--product-tile";
const NAME: &[&str] = &["h3.component--base-heading"];
const PRICE: &[&str] = &[
    r#"span[data-testid="best-price-container"]"#,
    "div.component--product-price span",
];
const SIZE: &[&str] = &["span.price-per-unit"];
const RATING: &[&str] = &[r#"div[itemprop="ratingValue"]"#];
const REVIEWS: &str = r#"meta[itemprop="reviewCount"]"#;

const HEADERS: &[&str] = &[
    "Category URL",
    "Product Name",
    "Price",
    "Size/Unit",
    "Rating",
    "Reviews",
];

/// One Wegmans product row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WegmansProduct {
    #[serde(rename = "Category URL")]
    pub category_url: String,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Size/Unit")]
    pub size_unit: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Reviews")]
    pub reviews: String,
}

/// Wegmans parser with its selectors compiled once
pub struct Wegmans {
    tile: Selector,
    name: Vec<Selector>,
    price: Vec<Selector>,
    size: Vec<Selector>,
    rating: Vec<Selector>,
    reviews: Selector,
}

impl Wegmans {
    /// Compile the tile selectors
    pub fn new() -> Result<Self> {
        Ok(Self {
            tile: compile(TILE)?,
            name: compile_chain(NAME)?,
            price: compile_chain(PRICE)?,
            size: compile_chain(SIZE)?,
            rating: compile_chain(RATING)?,
            reviews: compile(REVIEWS)?,
        })
    }
}

impl Retailer for Wegmans {
    type Record = WegmansProduct;

    fn kind(&self) -> RetailerKind {
        RetailerKind::Wegmans
    }

    fn ready_selector(&self) -> &'static str {
        TILE
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn parse(&self, html: &str, category_url: &str) -> Vec<WegmansProduct> {
        let document = Html::parse_document(html);

        document
            .select(&self.tile)
            .filter_map(|tile| {
                let name = first_text(tile, &self.name);
                if name.is_empty() {
                    return None;
                }
                Some(WegmansProduct {
                    category_url: category_url.to_string(),
                    name,
                    price: first_text(tile, &self.price),
                    size_unit: first_text(tile, &self.size),
                    rating: first_text(tile, &self.rating),
                    reviews: attr_of(tile, &self.reviews, "content"),
                })
            })
            .collect()
    }
}
