//! The four filter-map execution strategies
//!
//! Every strategy applies the same predicate ([`crate::transform::is_selected`])
//! and the same transform ([`crate::transform::apply`]) to a shared, read-only
//! dataset. They differ only in how the work is spread across threads:
//!
//! | Strategy           | Threads                     | Output order      |
//! |--------------------|-----------------------------|-------------------|
//! | `Sequential`       | caller only                 | input order       |
//! | `ParallelQuery`    | rayon pool                  | unspecified       |
//! | `ParallelForEach`  | rayon pool + shared bag     | unspecified       |
//! | `PartitionedTasks` | one scoped thread per core  | input order       |

use anyhow::Result;
use std::fmt;

use crate::data::{Record, ResultItem};

pub mod foreach;
pub mod partitioned;
pub mod query;
pub mod sequential;

/// Execution strategy for the filter-map workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sequential,
    ParallelQuery,
    ParallelForEach,
    PartitionedTasks,
}

impl Strategy {
    /// All strategies, in report order
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::ParallelQuery,
        Strategy::ParallelForEach,
        Strategy::PartitionedTasks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::ParallelQuery => "parallel-query",
            Strategy::ParallelForEach => "parallel-foreach",
            Strategy::PartitionedTasks => "partitioned-tasks",
        }
    }

    /// Whether the output sequence must match input order exactly
    pub fn preserves_order(&self) -> bool {
        matches!(self, Strategy::Sequential | Strategy::PartitionedTasks)
    }

    /// Run the strategy to completion over `dataset`
    pub fn execute(&self, dataset: &[Record]) -> Result<Vec<ResultItem>> {
        match self {
            Strategy::Sequential => Ok(sequential::run(dataset)),
            Strategy::ParallelQuery => Ok(query::run(dataset)),
            Strategy::ParallelForEach => Ok(foreach::run(dataset)),
            Strategy::PartitionedTasks => partitioned::run(dataset),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
