//! Relevance scoring for search results.

use crate::{matches, normalize, Record};

/// Relevance score levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceScore {
    /// No match
    None = 0,
    /// Within the fuzzy edit threshold
    Fuzzy = 10,
    /// Contains substring
    Contains = 20,
    /// Word boundary match
    WordBoundary = 30,
    /// Starts with query
    StartsWith = 40,
    /// Exact match
    Exact = 50,
}

/// Calculate relevance score for a text against a query.
///
/// Both sides are normalized, so case, accents and punctuation do not affect
/// the level.
///
/// # Arguments
/// * `text` - The text to score
/// * `query` - The search query
/// * `threshold` - Edit tolerance for the fuzzy level
///
/// # Returns
/// Relevance score (higher is better)
pub fn calculate_relevance(text: &str, query: &str, threshold: u32) -> u32 {
    relevance_level(text, query, threshold) as u32
}

fn relevance_level(text: &str, query: &str, threshold: u32) -> RelevanceScore {
    let text_norm = normalize(text);
    let query_norm = normalize(query);

    if text_norm.is_empty() || query_norm.is_empty() {
        return RelevanceScore::None;
    }

    if text_norm == query_norm {
        return RelevanceScore::Exact;
    }

    if text_norm.starts_with(&query_norm) {
        return RelevanceScore::StartsWith;
    }

    if text_norm.split_whitespace().any(|word| word.starts_with(&query_norm)) {
        return RelevanceScore::WordBoundary;
    }

    if text_norm.contains(&query_norm) {
        return RelevanceScore::Contains;
    }

    if matches(text, query, threshold) {
        return RelevanceScore::Fuzzy;
    }

    RelevanceScore::None
}

/// Highest relevance of `query` across the given `fields` of `record`.
///
/// A record that matched only through a secondary field still scores by
/// that field. Missing fields score [`RelevanceScore::None`].
pub fn best_relevance<R: Record>(record: &R, query: &str, fields: &[R::Field], threshold: u32) -> u32 {
    best_level(record, query, fields, threshold) as u32
}

fn best_level<R: Record>(record: &R, query: &str, fields: &[R::Field], threshold: u32) -> RelevanceScore {
    fields
        .iter()
        .filter_map(|field| record.text(*field))
        .map(|text| relevance_level(text, query, threshold))
        .max()
        .unwrap_or(RelevanceScore::None)
}

/// Stable-sort search results by their best relevance over `fields`,
/// highest first. Equally relevant records keep their order.
pub fn rank<R: Record>(results: &mut [&R], query: &str, fields: &[R::Field], threshold: u32) {
    if query.trim().is_empty() {
        return;
    }

    results.sort_by_cached_key(|record| std::cmp::Reverse(best_level(*record, query, fields, threshold)));
}
