//! Selector lookups over a parsed product tile
//!
//! Every lookup degrades to an empty string: tiles routinely lack a rating,
//! a unit price or a review count, and a missing field is not an error.

use scraper::{ElementRef, Selector};

use crate::core::{AisleError, Result};

/// Compile a CSS selector, keeping the source text in the error
pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AisleError::selector(selector, format!("{:?}", e)))
}

/// Compile an ordered fallback chain
pub fn compile_chain(selectors: &[&str]) -> Result<Vec<Selector>> {
    selectors.iter().map(|s| compile(s)).collect()
}

/// Text of an element with each text node trimmed and blanks dropped
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Stripped text of the first element matched by the first selector that matches
pub fn first_text(scope: ElementRef<'_>, chain: &[Selector]) -> String {
    chain
        .iter()
        .find_map(|selector| scope.select(selector).next())
        .map(stripped_text)
        .unwrap_or_default()
}

/// Attribute of the first matching element
pub fn attr_of(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(doc: &Html) -> ElementRef<'_> {
        doc.root_element()
    }

    #[test]
    fn test_stripped_text_joins_trimmed_nodes() {
        let doc = Html::parse_fragment("<span>  $3.99 <b> ea </b>\n</span>");
        let span = doc.select(&compile("span").unwrap()).next().unwrap();
        assert_eq!(stripped_text(span), "$3.99ea");
    }

    #[test]
    fn test_first_text_uses_fallback() {
        let doc = Html::parse_fragment(
            r#"<div class="component--product-price"><span>$1.29</span></div>"#,
        );
        let chain = compile_chain(&[
            r#"span[data-testid="best-price-container"]"#,
            "div.component--product-price span",
        ])
        .unwrap();
        assert_eq!(first_text(root(&doc), &chain), "$1.29");
    }

    #[test]
    fn test_first_text_missing_is_empty() {
        let doc = Html::parse_fragment("<div><p>nothing here</p></div>");
        let chain = compile_chain(&["h3.component--base-heading"]).unwrap();
        assert_eq!(first_text(root(&doc), &chain), "");
    }

    #[test]
    fn test_attr_of_missing_attribute_is_empty() {
        let doc = Html::parse_fragment(
            r#"<span data-testid="product-ratings" data-value="4.6"></span>
               <span data-testid="product-reviews"></span>"#,
        );
        let ratings = compile(r#"span[data-testid="product-ratings"]"#).unwrap();
        let reviews = compile(r#"span[data-testid="product-reviews"]"#).unwrap();
        assert_eq!(attr_of(root(&doc), &ratings, "data-value"), "4.6");
        assert_eq!(attr_of(root(&doc), &reviews, "data-value"), "");
    }

    #[test]
    fn test_compile_reports_bad_selector() {
        let err = compile("div[").unwrap_err();
        assert!(err.to_string().contains("div["));
    }
}
