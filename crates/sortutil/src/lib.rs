mod algorithms;

pub use algorithms::bucket_sort::bucket_sort;
pub use algorithms::merge_sort::merge_sort;
pub use algorithms::quick_sort::quick_sort;

/// Access to the single integer attribute bucket sort orders by.
///
/// Bucket sort takes no comparator; descending popularity is the only
/// ordering it produces.
pub trait Ranked {
    fn popularity(&self) -> i64;
}

/// The record type the bucket sort was written for. Only `popularity`
/// participates in ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub title: String,
    pub popularity: i64,
}

impl Ranked for Series {
    fn popularity(&self) -> i64 {
        self.popularity
    }
}
