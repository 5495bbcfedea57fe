pub mod bucket_sort;
pub mod common;
pub mod merge_sort;
pub mod quick_sort;
