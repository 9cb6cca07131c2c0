//! Small pure aggregation helpers shared by the reporters.

use std::collections::BTreeMap;
use std::hash::Hash;

use indexmap::IndexMap;

/// Most frequent value; ties resolve to the smallest value.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Ascending key order makes "first strictly-greater count wins" pick the
    // smallest value among tied maxima.
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrence counts keyed by value, in first-seen order.
#[must_use]
pub fn value_counts<T, I>(values: I) -> IndexMap<T, usize>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Smallest and largest values in one pass.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn min_max<T, I>(values: I) -> Option<(T, T)>
where
    T: Ord + Copy,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut lo = first;
    let mut hi = first;
    for value in iter {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    Some((lo, hi))
}
