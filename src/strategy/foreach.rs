use rayon::prelude::*;

use crate::data::{Record, ResultItem};
use crate::parallel::ConcurrentCollector;
use crate::transform;

/// Parallel loop where every iteration pushes into one shared collector.
///
/// A panic in any iteration unwinds out of `for_each` and aborts the run.
pub fn run(dataset: &[Record]) -> Vec<ResultItem> {
    let collector = ConcurrentCollector::new();

    dataset.par_iter().for_each(|record| {
        if transform::is_selected(record) {
            collector.push(transform::apply(record));
        }
    });

    collector.into_vec()
}
