//! "Did you mean" suggestions for mistyped queries.

use crate::highlight::find_case_insensitive;
use crate::{matches, normalize, Record, DEFAULT_THRESHOLD};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Default maximum number of suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Queries shorter than this (normalized, in characters) get no suggestions.
const MIN_QUERY_LEN: usize = 3;

/// Query words shorter than this are never corrected.
const MIN_QUERY_WORD_LEN: usize = 3;

/// Only words longer than this are added to the vocabulary individually.
const MIN_VOCABULARY_WORD_LEN: usize = 3;

/// Candidates whose length differs from the query word by more than this are
/// skipped without computing a distance.
const MAX_LENGTH_DIFFERENCE: usize = 3;

/// Corrections tried per query word.
const CANDIDATES_PER_WORD: usize = 3;

/// Known words and phrases that corrections are drawn from.
///
/// Entries keep insertion order: for each record, its full lower-cased primary
/// text first, then every word longer than three characters from the primary
/// and secondary texts. Duplicates are dropped, first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from the `primary` and `secondary` text fields of
    /// `records`. Records without a primary text contribute only words from
    /// the secondary one.
    pub fn build<R: Record>(records: &[R], primary: R::Field, secondary: R::Field) -> Self {
        let mut vocabulary = Self::default();

        for record in records {
            let title = record.text(primary).unwrap_or_default().to_lowercase();
            let details = record.text(secondary).unwrap_or_default().to_lowercase();

            vocabulary.insert(title.clone());

            for word in title.split_whitespace().chain(details.split_whitespace()) {
                if word.chars().count() > MIN_VOCABULARY_WORD_LEN {
                    vocabulary.insert(word.to_string());
                }
            }
        }

        debug!(records = records.len(), entries = vocabulary.len(), "built suggestion vocabulary");
        vocabulary
    }

    fn insert(&mut self, entry: String) {
        if !entry.is_empty() && self.seen.insert(entry.clone()) {
            self.entries.push(entry);
        }
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Propose corrected versions of `query`.
    ///
    /// Each query word of three or more characters is compared against
    /// vocabulary entries of similar length that do not already contain it;
    /// up to three entries that [`matches`] the word within `threshold` each
    /// yield a suggestion in which the first case-insensitive occurrence of the
    /// word in the original query is replaced. Suggestions are deduplicated
    /// and at most `max` are returned.
    pub fn suggest(&self, query: &str, threshold: u32, max: usize) -> Vec<String> {
        if normalize(query).chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let lowered = query.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();

        for word in lowered.split_whitespace() {
            let word_len = word.chars().count();
            if word_len < MIN_QUERY_WORD_LEN {
                continue;
            }

            let candidates = self
                .iter()
                .filter(|entry| entry.chars().count().abs_diff(word_len) <= MAX_LENGTH_DIFFERENCE)
                .filter(|entry| !entry.contains(word))
                .filter(|entry| matches(entry, word, threshold))
                .take(CANDIDATES_PER_WORD);

            for candidate in candidates {
                trace!(word, candidate, "suggestion candidate");
                let Some(range) = find_case_insensitive(query, word) else {
                    continue;
                };

                let corrected = format!("{}{}{}", &query[..range.start], candidate, &query[range.end..]);
                if !suggestions.contains(&corrected) {
                    suggestions.push(corrected);
                }
            }
        }

        suggestions.truncate(max);
        debug!(query, count = suggestions.len(), "generated suggestions");
        suggestions
    }
}

/// Suggest corrected queries using a vocabulary drawn from `records`.
///
/// Builds a [`Vocabulary`] from the `primary` (e.g. name) and `secondary`
/// (e.g. description) fields and returns at most `max` corrections, using the
/// default edit threshold. Queries shorter than three normalized characters
/// get no suggestions.
///
/// # Example
/// ```
/// use menu_search::{suggest, Product, ProductField};
///
/// let menu = vec![
///     Product::new(1, "Фирменный бургер", 390.0),
///     Product::new(2, "Картофель фри", 150.0),
/// ];
///
/// let fixes = suggest(&menu, "бургр", ProductField::Name, ProductField::Description, 3);
/// assert_eq!(fixes, vec!["бургер".to_string()]);
/// ```
pub fn suggest<R: Record>(
    records: &[R],
    query: &str,
    primary: R::Field,
    secondary: R::Field,
    max: usize,
) -> Vec<String> {
    if normalize(query).chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    Vocabulary::build(records, primary, secondary).suggest(query, DEFAULT_THRESHOLD, max)
}
