//! Parallel execution building blocks
//!
//! This module owns the pieces the concurrent strategies are assembled from:
//!
//! - **Resource discovery**: available processing units via `num_cpus::get()`
//! - **Static partitioning**: contiguous index ranges, one per worker, with the
//!   last range absorbing the remainder
//! - **Partitioned execution**: scoped crossbeam workers joined in partition
//!   order, no shared mutable state during the compute phase
//! - **Concurrent collection**: a lock-free append-only bag for workers that
//!   all write into one place
//!
//! It knows nothing about records or transforms; the `strategy` module wires
//! those in.
//!
//! # Example
//!
//! ```rust
//! use parbench::parallel::PartitionedExecutor;
//!
//! let executor = PartitionedExecutor::new(4);
//! let items: Vec<u32> = (0..10).collect();
//! let doubled: Vec<u32> = executor
//!     .execute(&items, |partition, _worker_id| {
//!         partition.iter().map(|x| x * 2).collect()
//!     })
//!     .unwrap();
//! assert_eq!(doubled[9], 18);
//! ```

pub mod collector;
pub mod core;
pub mod partition;

pub use collector::ConcurrentCollector;
pub use self::core::{PartitionedExecutor, available_workers};
pub use partition::partition_ranges;
