//! Splitting compound price and size strings
//!
//! `"$0.34/oz"` becomes `("0.34", "oz")`, `"Black Beans 15.5 oz"` becomes
//! `("15.5", "oz")`. Anything that does not match yields empty parts.

use regex::Regex;

use crate::core::Result;

/// A number and the unit that follows it, both as scraped text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quantity {
    pub value: String,
    pub unit: String,
}

impl Quantity {
    /// Whether nothing was recognised
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.unit.is_empty()
    }

    /// `"value unit"`, or empty when nothing was recognised
    pub fn joined(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Compiled cleanup patterns
#[derive(Debug, Clone)]
pub struct UnitSplitter {
    per_unit: Regex,
    size: Regex,
}

impl UnitSplitter {
    /// Compile the patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Anchored: the unit price must lead the string.
            per_unit: Regex::new(r"^\$?([\d.]+)[/ ]*([a-zA-Z.]+)")?,
            size: Regex::new(r"(\d+(\.\d+)?)\s*([a-zA-Z.]+)")?,
        })
    }

    /// Split a per-unit price such as `"$0.34/oz"`
    pub fn price_per_unit(&self, raw: &str) -> Quantity {
        self.per_unit
            .captures(raw)
            .map(|caps| Quantity {
                value: caps[1].to_string(),
                unit: caps[2].to_string(),
            })
            .unwrap_or_default()
    }

    /// Find the first size-like quantity inside a product name
    pub fn size_in_name(&self, name: &str) -> Quantity {
        self.size
            .captures(name)
            .map(|caps| Quantity {
                value: caps[1].to_string(),
                unit: caps[3].to_string(),
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> UnitSplitter {
        UnitSplitter::new().unwrap()
    }

    #[test]
    fn test_price_per_unit_forms() {
        let s = splitter();
        let q = s.price_per_unit("$0.34/oz");
        assert_eq!((q.value.as_str(), q.unit.as_str()), ("0.34", "oz"));

        assert!(s.price_per_unit("See price in cart").is_empty());

        let q = s.price_per_unit("1.99 lb");
        assert_eq!((q.value.as_str(), q.unit.as_str()), ("1.99", "lb"));

        let q = s.price_per_unit("$4.10/ct.");
        assert_eq!(q.unit, "ct.");
    }

    #[test]
    fn test_price_per_unit_is_anchored() {
        assert!(splitter().price_per_unit("about $0.34/oz").is_empty());
        assert!(splitter().price_per_unit("").is_empty());
    }

    #[test]
    fn test_size_in_name() {
        let s = splitter();
        let q = s.size_in_name("Member's Mark Black Beans, 15.5 oz, 8 pk");
        assert_eq!(q.joined(), "15.5 oz");

        let q = s.size_in_name("Kirkland 24ct Water");
        assert_eq!((q.value.as_str(), q.unit.as_str()), ("24", "ct"));

        assert_eq!(s.size_in_name("Fresh Bananas").joined(), "");
    }
}
