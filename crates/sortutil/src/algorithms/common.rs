use std::cmp::Ordering;

use crate::Ranked;

/// Merges two sequences that are already ordered by `compare` into one.
///
/// `Ordering::Greater` means the first argument sorts before the second.
/// On `Equal` the left element is taken first, so elements that compare
/// equal keep their relative input order and none are dropped.
pub fn merge<T, F>(left: &[T], right: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut l = 0;
    let mut r = 0;

    while l < left.len() && r < right.len() {
        match compare(&left[l], &right[r]) {
            Ordering::Greater | Ordering::Equal => {
                merged.push(left[l].clone());
                l += 1;
            }
            Ordering::Less => {
                merged.push(right[r].clone());
                r += 1;
            }
        }
    }

    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}

#[inline]
pub fn popularity_min_max<T: Ranked>(records: &[T]) -> Option<(i64, i64)> {
    let (first, rest) = records.split_first()?;
    let mut min = first.popularity();
    let mut max = min;
    for record in rest {
        let p = record.popularity();
        if p < min {
            min = p;
        }
        if p > max {
            max = p;
        }
    }
    Some((min, max))
}
