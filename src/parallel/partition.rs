use std::ops::Range;

/// Split `0..len` into contiguous, non-overlapping ranges, one per worker.
///
/// Every range except the last has `len / parts` elements; the last one
/// absorbs the remainder so the ranges cover `0..len` exactly.
///
/// The partition count is clamped to `1..=len`, so no range is empty while
/// `len > 0`. An empty input yields a single empty range.
///
/// # Examples
/// ```rust
/// use parbench::parallel::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(partition_ranges(2, 8), vec![0..1, 1..2]);
/// assert_eq!(partition_ranges(0, 4), vec![0..0]);
/// ```
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, len.max(1));
    let size = len / parts;

    (0..parts)
        .map(|index| {
            let start = index * size;
            let end = if index == parts - 1 { len } else { start + size };
            start..end
        })
        .collect()
}
