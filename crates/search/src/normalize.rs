//! Text normalization for comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for fuzzy comparison.
///
/// Lower-cases, decomposes (NFD) and drops combining marks, so `é` becomes `e`
/// and `й` becomes `и`. Every character that is not an ASCII letter, a Cyrillic
/// letter or an ASCII digit is replaced with a space, and the ends are trimmed.
/// Runs of spaces inside the string are left alone; callers split on
/// whitespace runs.
///
/// # Example
/// ```
/// use menu_search::normalize;
///
/// assert_eq!(normalize("  Crème Brûlée!"), "creme brulee");
/// assert_eq!(normalize("Ёжик"), "ежик");
/// ```
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    folded.trim_matches(' ').to_string()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || is_cyrillic_letter(c)
}

#[inline]
fn is_cyrillic_letter(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c) && c.is_alphabetic()
}
