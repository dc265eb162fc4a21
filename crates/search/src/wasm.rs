//! WASM bindings for the storefront search bar and admin product editor.
//!
//! Record collections cross the boundary as JSON arrays of products.

use crate::{Product, ProductField, SearchError, SearchResult};
use wasm_bindgen::prelude::*;

fn to_js_error(err: SearchError) -> JsValue {
    JsValue::from_str(&format!("E{}: {}", err.code() as u32, err))
}

fn parse_products(products_json: &str) -> Result<Vec<Product>, JsValue> {
    serde_json::from_str(products_json).map_err(|e| to_js_error(e.into()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

/// JavaScript numbers may be negative; a negative threshold means no
/// tolerance.
#[inline]
fn clamp_threshold(threshold: i32) -> u32 {
    u32::try_from(threshold).unwrap_or(0)
}

/// Normalize text for comparison.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Check if text plausibly matches a possibly mistyped query.
#[wasm_bindgen]
pub fn fuzzy_matches(text: &str, query: &str, threshold: i32) -> bool {
    crate::matches(text, query, clamp_threshold(threshold))
}

/// Filter products by name and description.
///
/// # Arguments
/// * `products_json` - JSON array of products
/// * `query` - Search query (blank returns every product)
/// * `threshold` - Edit tolerance
///
/// # Returns
/// JSON array of `{item, score}` in catalog order
#[wasm_bindgen]
pub fn search_products(products_json: &str, query: &str, threshold: i32) -> Result<String, JsValue> {
    let products = parse_products(products_json)?;
    let threshold = clamp_threshold(threshold);

    let results: Vec<SearchResult<&Product>> = crate::search(&products, query, &ProductField::ALL, threshold)
        .into_iter()
        .map(|item| SearchResult {
            score: crate::best_relevance(item, query, &ProductField::ALL, threshold),
            item,
        })
        .collect();

    to_json(&results)
}

/// Suggest corrected queries drawn from product names and descriptions.
///
/// # Returns
/// JSON array of strings
#[wasm_bindgen]
pub fn suggest_queries(products_json: &str, query: &str, max: usize) -> Result<String, JsValue> {
    let products = parse_products(products_json)?;
    let suggestions = crate::suggest(&products, query, ProductField::Name, ProductField::Description, max);
    to_json(&suggestions)
}

/// Pick related products for the product with `target_id`.
///
/// # Returns
/// JSON array of products, or an empty array if the target is unknown
#[wasm_bindgen]
pub fn recommend_products(products_json: &str, target_id: i64, max: usize) -> Result<String, JsValue> {
    let products = parse_products(products_json)?;
    let related: Vec<&Product> = match products.iter().find(|p| p.id == target_id) {
        Some(target) => crate::recommend(target, &products, max),
        None => Vec::new(),
    };
    to_json(&related)
}

/// Split text around the first case-insensitive occurrence of the query.
///
/// # Returns
/// JSON `{before, matched, after}` or `null` when there is no match
#[wasm_bindgen]
pub fn highlight_match(text: &str, query: &str) -> Result<String, JsValue> {
    to_json(&crate::highlight(text, query))
}
