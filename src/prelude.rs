//! Convenient re-exports for common types and traits

pub use crate::core::{BoxedJob, ClosureJob, FinderError, Job, Result};
pub use crate::pool::{QueueStats, WorkQueue, WorkQueueConfig, WorkerStats};
pub use crate::primes::{
    find_primes, find_primes_with, is_prime, partition, trial_division, RangeTask,
    ResultAggregator,
};
