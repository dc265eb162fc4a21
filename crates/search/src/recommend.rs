//! Related-product recommendations.

use crate::Recommendable;
use tracing::debug;

/// Default number of recommendations.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 4;

/// Select up to `max` records related to `target`.
///
/// The target itself (matched by ID) is never returned. Records sharing the
/// target's category come first, in pool order. If they do not fill `max`,
/// the rest is filled with records from other categories, closest price first
/// (ties keep pool order; records without a price go last).
///
/// # Arguments
/// * `target` - Record to find related items for
/// * `pool` - Candidate records, possibly including the target
/// * `max` - Maximum number of records to return
///
/// # Example
/// ```
/// use menu_search::{recommend, Product};
///
/// let target = Product::new(1, "Бургер", 500.0).with_category(1);
/// let pool = vec![
///     Product::new(2, "Чизбургер", 100.0).with_category(1),
///     Product::new(3, "Салат", 480.0).with_category(2),
///     target.clone(),
/// ];
///
/// let related = recommend(&target, &pool, 2);
/// let ids: Vec<i64> = related.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![2, 3]);
/// ```
pub fn recommend<'a, R: Recommendable>(target: &R, pool: &'a [R], max: usize) -> Vec<&'a R> {
    let candidates = pool.iter().filter(|candidate| candidate.id() != target.id());

    let (same_category, other_category): (Vec<&R>, Vec<&R>) = candidates
        .partition(|candidate| match (candidate.category(), target.category()) {
            (Some(theirs), Some(ours)) => theirs == ours,
            _ => false,
        });

    let mut related: Vec<&R> = same_category.into_iter().take(max).collect();

    if related.len() < max {
        let target_price = target.price();
        let mut by_price = other_category;
        // stable: equal distances keep pool order
        by_price.sort_by(|a, b| {
            price_gap(target_price, a.price()).total_cmp(&price_gap(target_price, b.price()))
        });
        related.extend(by_price.into_iter().take(max - related.len()));
    }

    debug!(pool = pool.len(), selected = related.len(), max, "selected recommendations");

    related
}

#[inline]
fn price_gap(target: Option<f64>, candidate: Option<f64>) -> f64 {
    match (target, candidate) {
        (Some(target), Some(candidate)) => (candidate - target).abs(),
        _ => f64::INFINITY,
    }
}
