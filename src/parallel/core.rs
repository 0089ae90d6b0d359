use anyhow::Result;

use super::partition::partition_ranges;

/// Static-partitioning executor.
///
/// Splits a slice into contiguous partitions, runs one scoped worker thread
/// per partition and joins them in partition order. Workers share nothing
/// mutable; each returns its own local `Vec`.
pub struct PartitionedExecutor<T, R> {
    max_workers: usize,
    _phantom: std::marker::PhantomData<(T, R)>,
}

impl<T, R> PartitionedExecutor<T, R>
where
    T: Sync,
    R: Send,
{
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Run `processor` over every partition of `items` and concatenate the
    /// partition-local results in partition order.
    ///
    /// The call returns only after every worker has finished. A panic in any
    /// worker is reported as an error once all workers have been joined.
    pub fn execute<F>(&self, items: &[T], processor: F) -> Result<Vec<R>>
    where
        F: Fn(&[T], usize) -> Vec<R> + Sync, // (partition, worker_id)
    {
        let ranges = partition_ranges(items.len(), self.max_workers);
        tracing::debug!(
            "Partitioned {} items across {} workers: {:?}",
            items.len(),
            ranges.len(),
            ranges
        );

        let processor = &processor;

        let partials = crossbeam::thread::scope(|s| -> Result<Vec<Vec<R>>> {
            let handles: Vec<_> = ranges
                .into_iter()
                .enumerate()
                .map(|(worker_id, range)| {
                    let partition = &items[range];
                    s.spawn(move |_| processor(partition, worker_id))
                })
                .collect();

            // Join barrier: wait on every handle, in partition order
            handles
                .into_iter()
                .enumerate()
                .map(|(worker_id, handle)| {
                    handle
                        .join()
                        .map_err(|_| anyhow::anyhow!("Worker {worker_id} panicked"))
                })
                .collect()
        })
        .map_err(|_| anyhow::anyhow!("Thread panic occurred during partitioned execution"))??;

        let total = partials.iter().map(Vec::len).sum();
        let mut results = Vec::with_capacity(total);
        for partial in partials {
            results.extend(partial);
        }
        Ok(results)
    }
}

/// Number of processing units available to worker threads (at least 1)
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_workers() {
        assert!(available_workers() >= 1);
    }

    #[test]
    fn test_results_keep_partition_order() {
        let executor = PartitionedExecutor::new(3);
        let items: Vec<u32> = (0..10).collect();
        let results: Vec<u32> = executor
            .execute(&items, |partition, _worker_id| {
                partition.iter().map(|x| x * 2).collect()
            })
            .unwrap();
        assert_eq!(results, (0..10).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_each_worker_gets_one_partition() {
        let executor = PartitionedExecutor::new(4);
        let items: Vec<u32> = (0..8).collect();
        let results = executor
            .execute(&items, |partition, worker_id| {
                vec![(worker_id, partition.to_vec())]
            })
            .unwrap();
        assert_eq!(
            results,
            vec![
                (0, vec![0, 1]),
                (1, vec![2, 3]),
                (2, vec![4, 5]),
                (3, vec![6, 7]),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let executor = PartitionedExecutor::<u32, u32>::new(4);
        let results = executor
            .execute(&[], |partition, _| partition.to_vec())
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_worker_panic_is_an_error() {
        let executor = PartitionedExecutor::new(2);
        let items: Vec<u32> = (0..4).collect();
        let result = executor.execute(&items, |partition: &[u32], worker_id| {
            if worker_id == 1 {
                panic!("boom");
            }
            partition.to_vec()
        });
        assert!(result.is_err());
    }
}
