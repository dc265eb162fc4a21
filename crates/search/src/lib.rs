//! Typo-tolerant search for restaurant menus.
//!
//! This crate provides:
//! - Text normalization (case, accents, punctuation)
//! - Levenshtein edit distance
//! - Word-level fuzzy matching and filtering over any [`Record`]
//! - "Did you mean" query suggestions
//! - Related-product recommendations
//! - Relevance ranking and match highlighting
//!
//! All operations are pure functions over caller-owned data.
//!
//! # Example
//!
//! ```
//! use menu_search::{search, suggest, Product, ProductField};
//!
//! let menu = vec![
//!     Product::new(1, "Сербский соус", 60.0),
//!     Product::new(2, "Фирменный бургер", 390.0),
//! ];
//!
//! let found = search(&menu, "сербский", &ProductField::ALL, 2);
//! assert_eq!(found[0].id, 1);
//!
//! let fixes = suggest(&menu, "бургр", ProductField::Name, ProductField::Description, 3);
//! assert_eq!(fixes, vec!["бургер".to_string()]);
//! ```

#![warn(missing_docs)]

mod catalog;
mod engine;
mod error;
mod fuzzy;
mod highlight;
mod normalize;
mod record;
mod recommend;
mod relevance;
mod suggest;
pub mod config;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, Category, CategoryField, Product, ProductField};
pub use config::SearchConfig;
pub use engine::{record_matches, search};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, matches, DEFAULT_THRESHOLD, SHORT_QUERY_LEN};
pub use highlight::{highlight, Highlight};
pub use normalize::normalize;
pub use record::{Recommendable, Record};
pub use recommend::{recommend, DEFAULT_MAX_RECOMMENDATIONS};
pub use relevance::{best_relevance, calculate_relevance, rank, RelevanceScore};
pub use suggest::{suggest, Vocabulary, DEFAULT_MAX_SUGGESTIONS};

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
