//! Splitting a search range into per-worker chunks

use crate::core::{FinderError, Result};
use crate::primes::oracle::validate_range;
use std::ops::RangeInclusive;

/// Check that at least one worker thread was requested.
pub fn validate_threads(threads: usize) -> Result<()> {
    if threads < 1 {
        return Err(FinderError::invalid_config(
            "threads",
            "Number of threads must be at least 1",
        ));
    }
    Ok(())
}

/// Split `[start, end]` into `min(threads, end - start + 1)` contiguous,
/// non-overlapping chunks in ascending order.
///
/// Chunk `i` covers offsets `i * len / chunks .. (i + 1) * len / chunks`, so
/// chunk sizes differ by at most one.
///
/// ```rust
/// use prime_finder::primes::partition;
///
/// let chunks = partition(1, 10, 3).unwrap();
/// assert_eq!(chunks, vec![1..=3, 4..=6, 7..=10]);
/// ```
pub fn partition(start: i64, end: i64, threads: usize) -> Result<Vec<RangeInclusive<i64>>> {
    validate_range(start, end)?;
    validate_threads(threads)?;

    // start >= 0, so the width cannot overflow
    let len = (end - start) as u128 + 1;
    let chunks = len.min(threads as u128);
    // Both bounds stay within [start, end]; `end + 1` is never formed.
    let first = |i: u128| start + (i * len / chunks) as i64;
    let last = |i: u128| start + ((i + 1) * len / chunks - 1) as i64;

    Ok((0..chunks).map(|i| first(i)..=last(i)).collect())
}
