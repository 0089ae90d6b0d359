use anyhow::{Context, Result};

use crate::data::{Record, ResultItem};
use crate::parallel::PartitionedExecutor;
use crate::transform;

/// One worker per processing unit, each scanning a contiguous partition.
///
/// Output order equals input order because partitions are contiguous,
/// scanned ascending, and concatenated in partition order after the join.
pub fn run(dataset: &[Record]) -> Result<Vec<ResultItem>> {
    run_with_workers(dataset, crate::parallel::available_workers())
}

pub fn run_with_workers(dataset: &[Record], workers: usize) -> Result<Vec<ResultItem>> {
    let executor = PartitionedExecutor::new(workers);

    executor
        .execute(dataset, |partition, worker_id| {
            let local: Vec<ResultItem> = partition
                .iter()
                .filter(|record| transform::is_selected(record))
                .map(transform::apply)
                .collect();
            tracing::trace!(
                "Worker {} produced {} of {} items",
                worker_id,
                local.len(),
                partition.len()
            );
            local
        })
        .context("Partitioned tasks strategy failed")
}
