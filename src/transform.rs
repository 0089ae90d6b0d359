//! The simulated expensive per-record computation

use std::thread;
use std::time::Duration;

use crate::data::{Record, ResultItem};

/// Blocking delay applied to every transform call
pub const TRANSFORM_DELAY: Duration = Duration::from_millis(1);

/// Square `value` after blocking the calling thread for [`TRANSFORM_DELAY`]
pub fn expensive_computation(value: u32) -> u64 {
    thread::sleep(TRANSFORM_DELAY);
    let value = u64::from(value);
    value * value
}

/// Filter predicate shared by every strategy
#[inline]
pub fn is_selected(record: &Record) -> bool {
    record.value % 2 == 0
}

/// Transform a selected record into its result item
pub fn apply(record: &Record) -> ResultItem {
    ResultItem::new(record.id, expensive_computation(record.value))
}
