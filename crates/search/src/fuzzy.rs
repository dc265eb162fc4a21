//! Fuzzy matching algorithms.

use crate::normalize;

/// Default number of edits tolerated by [`matches`].
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Queries this short (in characters, after normalization) are matched by
/// substring containment only.
pub const SHORT_QUERY_LEN: usize = 4;

/// Words this short or shorter are ignored by the word-level comparison.
const MIN_WORD_LEN: usize = 2;

/// Calculate Levenshtein edit distance between two strings.
///
/// Operates on Unicode scalar values, so `"ё"` vs `"е"` is one edit.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows of the (m+1) x (n+1) table
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Decide whether `text` plausibly matches a possibly mistyped `query`.
///
/// Both sides are normalized first. A normalized query of up to
/// [`SHORT_QUERY_LEN`] characters must appear verbatim in the text. Longer
/// queries are compared word by word, ignoring words of two characters or
/// fewer; the call succeeds as soon as any query word is close enough to any
/// text word:
///
/// * while scanning, a distance of at most `threshold * len(word) / 8`
///   accepts immediately;
/// * after scanning all text words, a best distance of at most `threshold`
///   accepts.
///
/// Returns false when either input is empty or the query normalizes to
/// nothing. A threshold of 0 means no tolerance: only exact word matches.
///
/// # Example
/// ```
/// use menu_search::matches;
///
/// assert!(matches("Сербский соус", "сербский", 2));
/// assert!(matches("Фирменный бургер", "бургр", 2));
/// assert!(!matches("Сербский соус", "xyzxyz", 2));
/// ```
pub fn matches(text: &str, query: &str, threshold: u32) -> bool {
    if text.is_empty() || query.is_empty() {
        return false;
    }

    let text = normalize(text);
    let query = normalize(query);

    if query.is_empty() {
        return false;
    }

    if query.chars().count() <= SHORT_QUERY_LEN {
        return text.contains(&query);
    }

    let text_words: Vec<&str> = significant_words(&text).collect();
    let threshold = threshold as usize;

    for query_word in significant_words(&query) {
        let word_len = query_word.chars().count();
        let early_accept = threshold.saturating_mul(word_len) / 8;
        let mut min_distance = usize::MAX;

        for text_word in &text_words {
            min_distance = min_distance.min(levenshtein_distance(text_word, query_word));
            if min_distance <= early_accept {
                return true;
            }
        }

        if min_distance <= threshold {
            return true;
        }
    }

    false
}

/// Whitespace-separated words longer than [`MIN_WORD_LEN`] characters.
fn significant_words(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
        .filter(|word| word.chars().count() > MIN_WORD_LEN)
}
