//! Sam's Club category listings
//!
//! Tiles are `role="group"` blocks. Size is not shown separately, so it is
//! recovered from the product name; the per-unit price is split into value
//! and unit.

use scraper::{Html, Selector};
use serde::Serialize;

use crate::core::{Result, RetailerKind};
use crate::extract::{attr_of, compile, compile_chain, first_text, UnitSplitter};
use crate::retailers::Retailer;

const TILE: &str = r#"div[role="group"]"#;
const NAME: &str = "span.w_q67L";
const PRICE: &[&str] = &["div.b.black", "div.b.black.black"];
const PRICE_PER_UNIT: &[&str] = &[r#"div[data-testid="product-price-per-unit"]"#];
const RATING: &str = r#"span[data-testid="product-ratings"]"#;
const REVIEWS: &str = r#"span[data-testid="product-reviews"]"#;

const HEADERS: &[&str] = &[
    "Category URL",
    "Product Name",
    "Price",
    "Size/Unit",
    "Size_value",
    "Size_unit",
    "Rating",
    "Reviews",
    "Price_per_unit_raw",
    "Price_per_unit_value",
    "Price_per_unit_unit",
];

/// One Sam's Club product row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamsClubProduct {
    #[serde(rename = "Category URL")]
    pub category_url: String,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Size/Unit")]
    pub size_unit: String,
    #[serde(rename = "Size_value")]
    pub size_value: String,
    #[serde(rename = "Size_unit")]
    pub size_unit_name: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Reviews")]
    pub reviews: String,
    #[serde(rename = "Price_per_unit_raw")]
    pub price_per_unit_raw: String,
    #[serde(rename = "Price_per_unit_value")]
    pub price_per_unit_value: String,
    #[serde(rename = "Price_per_unit_unit")]
    pub price_per_unit_unit: String,
}

/// Sam's Club parser with its selectors and unit patterns compiled once
pub struct SamsClub {
    tile: Selector,
    name: Vec<Selector>,
    price: Vec<Selector>,
    price_per_unit: Vec<Selector>,
    rating: Selector,
    reviews: Selector,
    units: UnitSplitter,
}

impl SamsClub {
    /// Compile the tile selectors and the unit splitter
    pub fn new() -> Result<Self> {
        Ok(Self {
            tile: compile(TILE)?,
            name: compile_chain(&[NAME])?,
            price: compile_chain(PRICE)?,
            price_per_unit: compile_chain(PRICE_PER_UNIT)?,
            rating: compile(RATING)?,
            reviews: compile(REVIEWS)?,
            units: UnitSplitter::new()?,
        })
    }
}

impl Retailer for SamsClub {
    type Record = SamsClubProduct;

    fn kind(&self) -> RetailerKind {
        RetailerKind::SamsClub
    }

    fn ready_selector(&self) -> &'static str {
        NAME
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn parse(&self, html: &str, category_url: &str) -> Vec<SamsClubProduct> {
        let document = Html::parse_document(html);

        document
            .select(&self.tile)
            .filter_map(|tile| {
                let name = first_text(tile, &self.name);
                let price = first_text(tile, &self.price);
                if name.is_empty() || price.is_empty() {
                    return None;
                }

                let ppu_raw = first_text(tile, &self.price_per_unit);
                let ppu = self.units.price_per_unit(&ppu_raw);
                let size = self.units.size_in_name(&name);

                Some(SamsClubProduct {
                    category_url: category_url.to_string(),
                    size_unit: size.joined(),
                    size_value: size.value,
                    size_unit_name: size.unit,
                    rating: attr_of(tile, &self.rating, "data-value"),
                    reviews: attr_of(tile, &self.reviews, "data-value"),
                    price_per_unit_raw: ppu_raw,
                    price_per_unit_value: ppu.value,
                    price_per_unit_unit: ppu.unit,
                    name,
                    price,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.samsclub.com/browse/pantry/1532";

    fn tile(body: &str) -> String {
        format!(r#"<html><body><div role="group">{}</div></body></html>"#, body)
    }

    #[test]
    fn test_full_tile() {
        let html = tile(
            r#"<span class="w_q67L">Member's Mark Chickpeas, 15.5 oz, 8 pk</span>
               <div class="b black">$7.48</div>
               <div data-testid="product-price-per-unit">$0.06/oz</div>
               <span data-testid="product-ratings" data-value="4.8"></span>
               <span data-testid="product-reviews" data-value="1204"></span>"#,
        );
        let rows = SamsClub::new().unwrap().parse(&html, URL);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "Member's Mark Chickpeas, 15.5 oz, 8 pk");
        assert_eq!(row.price, "$7.48");
        assert_eq!(row.size_unit, "15.5 oz");
        assert_eq!(row.size_value, "15.5");
        assert_eq!(row.size_unit_name, "oz");
        assert_eq!(row.rating, "4.8");
        assert_eq!(row.reviews, "1204");
        assert_eq!(row.price_per_unit_raw, "$0.06/oz");
        assert_eq!(row.price_per_unit_value, "0.06");
        assert_eq!(row.price_per_unit_unit, "oz");
    }

    #[test]
    fn test_tile_without_price_is_skipped() {
        let html = tile(r#"<span class="w_q67L">Sold out item</span>"#);
        assert!(SamsClub::new().unwrap().parse(&html, URL).is_empty());
    }

    #[test]
    fn test_name_without_size_leaves_size_empty() {
        let html = tile(
            r#"<span class="w_q67L">Fresh Avocados</span>
               <div class="b black">$6.98</div>"#,
        );
        let rows = SamsClub::new().unwrap().parse(&html, URL);
        assert_eq!(rows[0].size_unit, "");
        assert_eq!(rows[0].size_value, "");
        assert_eq!(rows[0].price_per_unit_raw, "");
        assert_eq!(rows[0].price_per_unit_value, "");
    }

    #[test]
    fn test_ready_selector_is_product_name() {
        let sams = SamsClub::new().unwrap();
        assert_eq!(sams.ready_selector(), "span.w_q67L");
        assert_eq!(sams.headers().len(), 11);
    }
}
