use crate::Ranked;

use super::common;

/// Recursive range-partitioning bucket sort, descending by popularity.
///
/// The branching factor is fixed at 2 and bucket sizes are not balanced, so
/// tightly clustered popularity values degrade toward O(n^2). Reference
/// implementation, not meant for performance-critical use.
///
/// The input is never mutated; the ordered copy is returned. Elements with
/// equal popularity keep their relative input order.
pub fn bucket_sort<T>(records: &[T]) -> Vec<T>
where
    T: Ranked + Clone,
{
    bucket_sort_owned(records.to_vec())
}

fn bucket_sort_owned<T>(mut records: Vec<T>) -> Vec<T>
where
    T: Ranked + Clone,
{
    if records.len() < 2 {
        return records;
    }
    if records.len() == 2 {
        if records[1].popularity() > records[0].popularity() {
            records.swap(0, 1);
        }
        return records;
    }

    let Some((min, max)) = common::popularity_min_max(&records) else {
        return records;
    };

    // The values span at most two distinct integers: no recursion needed,
    // the groups separate in one pass.
    if min + 1 >= max {
        if min == max {
            return records;
        }

        let mut front = Vec::with_capacity(records.len());
        let mut back = Vec::new();
        for record in records {
            if record.popularity() == min {
                back.push(record);
            } else {
                front.push(record);
            }
        }
        front.append(&mut back);
        return front;
    }

    // Widened so the average cannot overflow at the i64 extremes. This
    // branch only runs with max >= min + 2, which leaves max above mid and
    // min at or below it: both buckets are non-empty and strictly smaller
    // than the input.
    let mid = ((min as i128 + max as i128) / 2) as i64;

    let mut first_bucket = Vec::new();
    let mut second_bucket = Vec::new();
    for record in records {
        if record.popularity() > mid {
            first_bucket.push(record);
        } else {
            second_bucket.push(record);
        }
    }

    let mut ordered = bucket_sort_owned(first_bucket);
    ordered.append(&mut bucket_sort_owned(second_bucket));
    ordered
}
