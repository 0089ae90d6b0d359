use rayon::prelude::*;

use crate::data::{Record, ResultItem};
use crate::transform;

/// Declarative data-parallel filter-then-map on the rayon pool.
///
/// Rayon splits the slice and merges the pieces; callers should rely on set
/// equality with the baseline only.
pub fn run(dataset: &[Record]) -> Vec<ResultItem> {
    dataset
        .par_iter()
        .filter(|record| transform::is_selected(record))
        .map(transform::apply)
        .collect()
}
