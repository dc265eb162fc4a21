//! Locating a query inside original, non-normalized text.

use serde::Serialize;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Original text split around the highlighted part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight<'a> {
    /// Text before the match
    pub before: &'a str,
    /// The matched text, as written in the source
    pub matched: &'a str,
    /// Text after the match
    pub after: &'a str,
}

/// Split `text` around the first case-insensitive occurrence of `query`.
///
/// The slices come from the original `text`, so the caller can render them
/// with their original casing and accents. Boundaries are widened to whole
/// grapheme clusters. Returns `None` when the query is blank or not found.
///
/// # Example
/// ```
/// use menu_search::highlight;
///
/// let h = highlight("Фирменный Бургер", "бургер").unwrap();
/// assert_eq!((h.before, h.matched, h.after), ("Фирменный ", "Бургер", ""));
/// ```
pub fn highlight<'a>(text: &'a str, query: &str) -> Option<Highlight<'a>> {
    let range = find_case_insensitive(text, query.trim())?;
    let range = widen_to_graphemes(text, range);

    Some(Highlight {
        before: &text[..range.start],
        matched: &text[range.clone()],
        after: &text[range.end..],
    })
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`.
pub(crate) fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return None;
    }

    // Lower-casing can change byte lengths, so remember which source char
    // every byte of the folded string came from.
    let mut folded = String::with_capacity(haystack.len());
    let mut origins = Vec::with_capacity(haystack.len());
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origins.extend(std::iter::repeat_n(offset, lower.len_utf8()));
        }
    }

    let start = folded.find(&needle)?;
    let last = origins[start + needle.len() - 1];
    let end = last + haystack[last..].chars().next().map_or(0, char::len_utf8);

    Some(origins[start]..end)
}

fn widen_to_graphemes(text: &str, range: Range<usize>) -> Range<usize> {
    let mut start = 0;
    let mut end = text.len();
    for (offset, _) in text.grapheme_indices(true) {
        if offset <= range.start {
            start = offset;
        }
        if offset >= range.end {
            end = offset;
            break;
        }
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_middle() {
        let h = highlight("Острый сербский соус", "СЕРБ").unwrap();
        assert_eq!(h.before, "Острый ");
        assert_eq!(h.matched, "серб");
        assert_eq!(h.after, "ский соус");
    }

    #[test]
    fn test_highlight_keeps_source_case() {
        let h = highlight("Pizza MARGHERITA", "margherita").unwrap();
        assert_eq!(h.matched, "MARGHERITA");
        assert_eq!(h.after, "");
    }

    #[test]
    fn test_highlight_first_occurrence_only() {
        let h = highlight("соус и соус", "соус").unwrap();
        assert_eq!(h.before, "");
        assert_eq!(h.after, " и соус");
    }

    #[test]
    fn test_highlight_not_found_or_blank() {
        assert!(highlight("Картофель фри", "бургер").is_none());
        assert!(highlight("Картофель фри", "   ").is_none());
    }

    #[test]
    fn test_highlight_combining_mark_stays_with_letter() {
        // "e" followed by a combining acute accent
        let text = "cafe\u{301} noir";
        let h = highlight(text, "cafe").unwrap();
        assert_eq!(h.matched, "cafe\u{301}");
        assert_eq!(h.after, " noir");
    }

    #[test]
    fn test_find_with_length_changing_lowercase() {
        // 'İ' lower-cases to two chars
        let range = find_case_insensitive("xİstanbul", "stan").unwrap();
        assert_eq!(&"xİstanbul"[range], "stan");
    }
}
