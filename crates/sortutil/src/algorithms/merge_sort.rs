use std::cmp::Ordering;

use super::common;

/// Top-down merge sort. The input is never mutated; the ordered copy is
/// returned.
///
/// `compare` returning `Ordering::Greater` puts its first argument first,
/// so a plain `a.cmp(b)` comparator yields descending order. Elements that
/// compare equal keep their relative input order.
pub fn merge_sort<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_recursive(data, &mut compare)
}

fn merge_sort_recursive<T, F>(data: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    // Length 0 or 1 is already sorted; recursing further would never
    // shrink the range.
    if data.len() < 2 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = merge_sort_recursive(&data[..mid], compare);
    let right = merge_sort_recursive(&data[mid..], compare);
    common::merge(&left, &right, compare)
}
