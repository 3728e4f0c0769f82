//! Parallel prime search over a work queue

use crate::core::{Job, Result};
use crate::pool::WorkQueue;
use crate::primes::aggregator::ResultAggregator;
use crate::primes::oracle::{is_prime, validate_range};
use crate::primes::partition::{partition, validate_threads};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// A shareable primality predicate
pub type Oracle = Arc<dyn Fn(i64) -> bool + Send + Sync>;

/// Scans one sub-range with an oracle and records the hits.
pub struct RangeTask {
    range: RangeInclusive<i64>,
    results: ResultAggregator,
    oracle: Oracle,
    name: String,
}

impl RangeTask {
    /// Create a task scanning `range` into `results`
    pub fn new(range: RangeInclusive<i64>, results: ResultAggregator, oracle: Oracle) -> Self {
        let name = format!("range[{}..={}]", range.start(), range.end());
        Self {
            range,
            results,
            oracle,
            name,
        }
    }

    /// The sub-range this task scans
    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }
}

impl Job for RangeTask {
    fn execute(&mut self) -> Result<()> {
        let hits: Vec<i64> = self.range.clone().filter(|&n| (self.oracle)(n)).collect();
        log::trace!("{} found {} primes", self.name, hits.len());
        self.results.extend(hits);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Return every prime in `[start, end]`, searching with `threads` workers.
///
/// The result is the same as [`trial_division`](crate::primes::trial_division)
/// for the same range; the thread count only affects speed.
///
/// # Errors
///
/// - [`FinderError::InvalidRange`](crate::FinderError::InvalidRange) if
///   `start < 0` or `end < start`
/// - [`FinderError::InvalidConfig`](crate::FinderError::InvalidConfig) if
///   `threads < 1`
///
/// ```rust
/// use prime_finder::primes::find_primes;
///
/// let primes = find_primes(1, 30, 3).unwrap();
/// assert_eq!(
///     primes.into_iter().collect::<Vec<_>>(),
///     vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
/// );
/// ```
pub fn find_primes(start: i64, end: i64, threads: usize) -> Result<BTreeSet<i64>> {
    find_primes_with(start, end, threads, is_prime)
}

/// Like [`find_primes`], with a caller-supplied primality predicate.
///
/// A task whose predicate panics does not stall the search: the remaining
/// tasks still run, and the first fault is returned once the queue drains.
pub fn find_primes_with<P>(
    start: i64,
    end: i64,
    threads: usize,
    oracle: P,
) -> Result<BTreeSet<i64>>
where
    P: Fn(i64) -> bool + Send + Sync + 'static,
{
    validate_range(start, end)?;
    validate_threads(threads)?;

    let chunks = partition(start, end, threads)?;
    let oracle: Oracle = Arc::new(oracle);
    let results = ResultAggregator::new();
    let queue = WorkQueue::with_threads(threads)?;

    log::debug!(
        "searching [{}, {}] in {} chunks on {} threads",
        start,
        end,
        chunks.len(),
        threads
    );

    for chunk in chunks {
        queue.submit(RangeTask::new(chunk, results.clone(), Arc::clone(&oracle)))?;
    }

    queue.finish();
    let faults = queue.take_faults();
    queue.shutdown()?;

    if let Some(fault) = faults.into_iter().next() {
        return Err(fault);
    }
    Ok(results.into_sorted())
}
