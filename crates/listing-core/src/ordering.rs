//! Listing row ordering.

use std::cmp::Ordering;

use listing_model::MergedEntry;

/// Compare two category values.
///
/// Integer categories compare numerically and sort before anything else;
/// the rest compare as plain strings.
pub fn compare_categories(left: &str, right: &str) -> Ordering {
    match (left.trim().parse::<i64>(), right.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => left.cmp(right),
    }
}

/// Stable sort by category; ties keep merge order.
pub fn sort_by_category(entries: &mut [MergedEntry]) {
    entries.sort_by(|a, b| compare_categories(&a.category, &b.category));
}
