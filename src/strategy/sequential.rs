use crate::data::{Record, ResultItem};
use crate::transform;

/// Single-threaded filter-then-map, in input order
pub fn run(dataset: &[Record]) -> Vec<ResultItem> {
    dataset
        .iter()
        .filter(|record| transform::is_selected(record))
        .map(transform::apply)
        .collect()
}
