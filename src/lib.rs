//! # parbench - filter-map strategy micro-benchmark
//!
//! parbench generates an in-memory dataset once, then runs the same
//! filter-and-transform workload over it with four execution strategies and
//! reports how long each one took:
//!
//! - **Sequential**: a plain iterator on the calling thread (the baseline)
//! - **Parallel query**: a rayon parallel iterator
//! - **Parallel for-each**: a rayon loop pushing into a lock-free collector
//! - **Partitioned tasks**: one scoped thread per core over contiguous ranges
//!
//! Each record whose value is even is squared after a fixed 1 ms blocking
//! delay, so the runtimes mostly measure how well each strategy overlaps
//! that delay across threads.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with the default 10,000 records
//! parbench
//!
//! # Smaller run with progress logging
//! parbench -v run --size 2000
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use parbench::data::Record;
//! use parbench::strategy::Strategy;
//!
//! let dataset = vec![Record::new(0, 4), Record::new(1, 7), Record::new(2, 10)];
//! let results = Strategy::PartitionedTasks.execute(&dataset)?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].computed, 100);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod harness;
pub mod parallel;
pub mod strategy;
pub mod transform;

pub use cli::{Cli, Output};
pub use config::BenchConfig;

/// Result type alias for parbench operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
