//! Fuzzy filtering over record collections.

use crate::{matches, Record};
use tracing::debug;

/// Filter `records` down to those where at least one of `fields` fuzzily
/// matches `query`.
///
/// A blank query (empty or whitespace only) means "no filter": every record is
/// returned. The result is always an order-preserving subsequence of the input;
/// duplicates are kept and nothing is mutated.
///
/// With the `parallel` feature, records are evaluated on the rayon pool and
/// collected back in input order.
///
/// # Arguments
/// * `records` - Records to filter
/// * `query` - Possibly mistyped search text
/// * `fields` - Fields that take part in the match
/// * `threshold` - Edit tolerance passed to [`matches`]
///
/// # Example
/// ```
/// use menu_search::{search, Product, ProductField};
///
/// let menu = vec![
///     Product::new(1, "Бургер XXXL", 450.0),
///     Product::new(2, "Фирменный бургер", 390.0),
///     Product::new(3, "Картофель фри", 150.0),
/// ];
///
/// let found = search(&menu, "бургр", &[ProductField::Name], 2);
/// let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
pub fn search<'a, R>(records: &'a [R], query: &str, fields: &[R::Field], threshold: u32) -> Vec<&'a R>
where
    R: Record + Sync,
{
    if query.trim().is_empty() {
        return records.iter().collect();
    }

    #[cfg(feature = "parallel")]
    let found: Vec<&R> = {
        use rayon::prelude::*;
        records
            .par_iter()
            .filter(|record| record_matches(*record, query, fields, threshold))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let found: Vec<&R> = records
        .iter()
        .filter(|record| record_matches(*record, query, fields, threshold))
        .collect();

    debug!(query, total = records.len(), matched = found.len(), "fuzzy search");

    found
}

/// Returns true if any of `fields` on `record` matches `query`.
#[inline]
pub fn record_matches<R: Record>(record: &R, query: &str, fields: &[R::Field], threshold: u32) -> bool {
    fields.iter().any(|field| {
        record
            .text(*field)
            .is_some_and(|text| matches(text, query, threshold))
    })
}
