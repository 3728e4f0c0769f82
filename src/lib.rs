//! # Prime Finder
//!
//! Parallel prime search over an integer range, built on a small fixed-size
//! work queue.
//!
//! ## Features
//!
//! - **Work Queue**: fixed pool of worker threads fed from a FIFO buffer
//! - **Drain Barrier**: `finish()` blocks until every submitted job is done
//! - **Graceful Shutdown**: pending jobs complete before workers are joined
//! - **Fault Isolation**: a failing or panicking job never stalls the barrier
//! - **Range Partitioning**: balanced contiguous chunks, one per worker
//!
//! ## Quick Start
//!
//! ```rust
//! use prime_finder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let parallel = find_primes(1, 1000, 4)?;
//! let sequential = trial_division(1, 1000)?;
//!
//! assert_eq!(parallel, sequential);
//! assert_eq!(parallel.len(), 168);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the Work Queue Directly
//!
//! ```rust
//! use prime_finder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = WorkQueueConfig::new(2).with_thread_name_prefix("scan");
//! let queue = WorkQueue::with_config(config)?;
//!
//! let results = ResultAggregator::new();
//! for chunk in partition(1, 100, queue.num_threads())? {
//!     queue.submit(RangeTask::new(chunk, results.clone(), std::sync::Arc::new(is_prime)))?;
//! }
//!
//! queue.finish();
//! queue.shutdown()?;
//! assert_eq!(results.len(), 25);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod benchmark;
pub mod core;
pub mod pool;
pub mod prelude;
pub mod primes;

pub use crate::core::{BoxedJob, ClosureJob, FinderError, Job, Result};
pub use crate::pool::{QueueStats, WorkQueue, WorkQueueConfig, WorkerStats};
pub use crate::primes::{find_primes, find_primes_with, is_prime, trial_division, ResultAggregator};
