//! Fixed-size work queue with a drain barrier

use crate::core::{BoxedJob, ClosureJob, FinderError, Job, Result};
use crate::pool::config::WorkQueueConfig;
use crate::pool::worker::{join_all, Worker, WorkerStats};
use parking_lot::{Condvar, Mutex};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// State guarded by the queue lock.
///
/// `pending` and `outstanding` change together under one lock so that a
/// completion dropping the counter to zero can never slip between a
/// `finish()` caller's check and its wait.
#[derive(Default)]
struct State {
    pending: VecDeque<BoxedJob>,
    /// Jobs submitted but not yet completed (pending + running)
    outstanding: usize,
    shutdown: bool,
    faults: Vec<FinderError>,
}

/// State shared between a [`WorkQueue`] and its workers
pub(crate) struct Shared {
    state: Mutex<State>,
    /// Signaled on new work or shutdown
    work_available: Condvar,
    /// Signaled when `outstanding` reaches zero
    drained: Condvar,
}

impl Shared {
    fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            work_available: Condvar::new(),
            drained: Condvar::new(),
        }
    }

    /// Block until a job is available. Returns `None` once shutdown has been
    /// requested and nothing is left pending.
    pub(crate) fn next_job(&self) -> Option<BoxedJob> {
        let mut state = self.state.lock();
        loop {
            if let Some(job) = state.pending.pop_front() {
                return Some(job);
            }
            if state.shutdown {
                return None;
            }
            self.work_available.wait(&mut state);
        }
    }

    /// Record a finished job, successful or not.
    pub(crate) fn complete_job(&self, fault: Option<FinderError>) {
        let mut state = self.state.lock();
        debug_assert!(state.outstanding > 0, "completed more jobs than submitted");
        state.outstanding = state.outstanding.saturating_sub(1);
        if let Some(fault) = fault {
            state.faults.push(fault);
        }
        if state.outstanding == 0 {
            self.drained.notify_all();
        }
    }
}

/// Point-in-time statistics for a work queue
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    /// Number of worker threads
    pub threads: usize,
    /// Jobs accepted by `execute`/`submit`
    pub submitted: u64,
    /// Jobs that completed successfully
    pub completed: u64,
    /// Jobs that returned an error
    pub failed: u64,
    /// Jobs that panicked
    pub panicked: u64,
    /// Time spent running jobs across all workers (microseconds)
    pub busy_time_us: u64,
    /// Jobs submitted but not yet completed
    pub outstanding: usize,
    /// Jobs waiting for a worker
    pub pending: usize,
}

/// A fixed-size pool of worker threads fed from a FIFO buffer.
///
/// Jobs are submitted with [`execute`](Self::execute) or
/// [`submit`](Self::submit). [`finish`](Self::finish) blocks until every job
/// submitted so far has completed, and [`shutdown`](Self::shutdown) lets the
/// workers drain whatever is pending, then joins them.
///
/// A job that returns an error or panics is logged and recorded as a fault;
/// its worker keeps running and the job still counts as completed, so
/// `finish()` cannot hang on it. Recorded faults are collected with
/// [`take_faults`](Self::take_faults).
///
/// `finish()` and `shutdown()` must not be called from inside a job.
///
/// ```rust
/// use prime_finder::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let queue = WorkQueue::with_threads(4)?;
/// let counter = Arc::new(AtomicUsize::new(0));
///
/// for _ in 0..10 {
///     let counter = Arc::clone(&counter);
///     queue.execute(move || {
///         counter.fetch_add(1, Ordering::Relaxed);
///         Ok(())
///     })?;
/// }
///
/// queue.finish();
/// assert_eq!(counter.load(Ordering::Relaxed), 10);
/// queue.shutdown()?;
/// # Ok(())
/// # }
/// ```
pub struct WorkQueue {
    config: WorkQueueConfig,
    shared: Arc<Shared>,
    workers: Mutex<Vec<Worker>>,
    stats: Vec<Arc<WorkerStats>>,
    total_jobs_submitted: AtomicU64,
}

impl std::fmt::Debug for WorkQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkQueue")
            .field("config", &self.config)
            .field("is_shutdown", &self.is_shutdown())
            .field(
                "total_jobs_submitted",
                &self.total_jobs_submitted.load(Ordering::Relaxed),
            )
            .finish()
    }
}

impl WorkQueue {
    /// Create a work queue with one worker per available CPU
    pub fn new() -> Result<Self> {
        Self::with_config(WorkQueueConfig::default())
    }

    /// Create a work queue with the specified number of threads
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        Self::with_config(WorkQueueConfig::new(num_threads))
    }

    /// Create a work queue with custom configuration.
    ///
    /// All worker threads are spawned before this returns. If one fails to
    /// spawn, the workers already running are shut down and joined.
    pub fn with_config(config: WorkQueueConfig) -> Result<Self> {
        config.validate()?;

        let shared = Arc::new(Shared::new());
        let mut workers = Vec::with_capacity(config.num_threads);
        for id in 0..config.num_threads {
            match Worker::spawn(id, config.thread_name(id), Arc::clone(&shared)) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    shared.state.lock().shutdown = true;
                    shared.work_available.notify_all();
                    // join failures are logged by join_all; the spawn error is returned
                    let _ = join_all(workers);
                    return Err(e);
                }
            }
        }

        log::debug!(
            "work queue '{}' started with {} workers",
            config.thread_name_prefix,
            config.num_threads
        );

        let stats = workers.iter().map(Worker::stats).collect();
        Ok(Self {
            config,
            shared,
            workers: Mutex::new(workers),
            stats,
            total_jobs_submitted: AtomicU64::new(0),
        })
    }

    /// Submit a job to the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::ShuttingDown`] if [`shutdown`](Self::shutdown)
    /// has been requested; the job is not run.
    pub fn submit<J: Job + 'static>(&self, job: J) -> Result<()> {
        let mut state = self.shared.state.lock();
        if state.shutdown {
            return Err(FinderError::shutting_down(state.pending.len()));
        }
        state.pending.push_back(Box::new(job));
        state.outstanding += 1;
        drop(state);

        self.shared.work_available.notify_one();
        self.total_jobs_submitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Submit a closure as a job
    pub fn execute<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() -> Result<()> + Send + 'static,
    {
        self.submit(ClosureJob::new(f))
    }

    /// Block until every job submitted so far has completed.
    ///
    /// Does not stop new submissions; call [`shutdown`](Self::shutdown) for that.
    pub fn finish(&self) {
        let mut state = self.shared.state.lock();
        while state.outstanding > 0 {
            self.shared.drained.wait(&mut state);
        }
    }

    /// Stop accepting jobs and join every worker once pending jobs are done.
    ///
    /// Jobs already pending or running still complete. Safe to call more
    /// than once; later calls return after the first has joined the workers.
    pub fn shutdown(&self) -> Result<()> {
        // Held across the joins so a concurrent second caller waits for them.
        let mut workers = self.workers.lock();

        {
            let mut state = self.shared.state.lock();
            if state.shutdown && workers.is_empty() {
                return Ok(());
            }
            state.shutdown = true;
        }
        self.shared.work_available.notify_all();

        let result = join_all(workers.drain(..));

        log::debug!(
            "work queue '{}' shut down after {} jobs",
            self.config.thread_name_prefix,
            self.total_jobs_submitted()
        );
        result
    }

    /// Get the number of worker threads
    pub fn num_threads(&self) -> usize {
        self.config.num_threads
    }

    /// Check if shutdown has been requested
    pub fn is_shutdown(&self) -> bool {
        self.shared.state.lock().shutdown
    }

    /// Jobs waiting for a worker
    pub fn pending(&self) -> usize {
        self.shared.state.lock().pending.len()
    }

    /// Jobs submitted but not yet completed
    pub fn outstanding(&self) -> usize {
        self.shared.state.lock().outstanding
    }

    /// Get total number of jobs submitted
    pub fn total_jobs_submitted(&self) -> u64 {
        self.total_jobs_submitted.load(Ordering::Relaxed)
    }

    /// Get statistics for all workers
    pub fn worker_stats(&self) -> &[Arc<WorkerStats>] {
        &self.stats
    }

    /// Take the faults recorded by failed or panicked jobs so far
    pub fn take_faults(&self) -> Vec<FinderError> {
        std::mem::take(&mut self.shared.state.lock().faults)
    }

    /// Snapshot of queue-wide statistics
    pub fn stats(&self) -> QueueStats {
        let (outstanding, pending) = {
            let state = self.shared.state.lock();
            (state.outstanding, state.pending.len())
        };
        QueueStats {
            threads: self.config.num_threads,
            submitted: self.total_jobs_submitted(),
            completed: self.stats.iter().map(|s| s.get_jobs_processed()).sum(),
            failed: self.stats.iter().map(|s| s.get_jobs_failed()).sum(),
            panicked: self.stats.iter().map(|s| s.get_jobs_panicked()).sum(),
            busy_time_us: self.stats.iter().map(|s| s.get_busy_time_us()).sum(),
            outstanding,
            pending,
        }
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!(
                "failed to shut down work queue '{}' during drop: {}",
                self.config.thread_name_prefix,
                e
            );
        }
    }
}
