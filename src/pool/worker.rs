//! Worker thread implementation

use crate::core::{BoxedJob, FinderError, Result};
use crate::pool::work_queue::Shared;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::{span, Level};

/// Statistics for a worker thread
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total number of jobs that completed successfully
    pub jobs_processed: AtomicU64,
    /// Total number of jobs that returned an error
    pub jobs_failed: AtomicU64,
    /// Total number of jobs that panicked
    pub jobs_panicked: AtomicU64,
    /// Total time spent running jobs (microseconds)
    pub busy_time_us: AtomicU64,
}

impl WorkerStats {
    /// Create new worker statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total jobs processed
    pub fn get_jobs_processed(&self) -> u64 {
        self.jobs_processed.load(Ordering::Relaxed)
    }

    /// Get total jobs failed
    pub fn get_jobs_failed(&self) -> u64 {
        self.jobs_failed.load(Ordering::Relaxed)
    }

    /// Get total jobs panicked
    pub fn get_jobs_panicked(&self) -> u64 {
        self.jobs_panicked.load(Ordering::Relaxed)
    }

    /// Get total busy time in microseconds
    pub fn get_busy_time_us(&self) -> u64 {
        self.busy_time_us.load(Ordering::Relaxed)
    }
}

/// A worker thread that pulls jobs from a work queue until it shuts down
#[derive(Debug)]
pub struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
    stats: Arc<WorkerStats>,
}

impl Worker {
    /// Spawn a named worker thread bound to the queue's shared state.
    pub(crate) fn spawn(id: usize, name: String, shared: Arc<Shared>) -> Result<Self> {
        let stats = Arc::new(WorkerStats::new());
        let stats_clone = Arc::clone(&stats);

        let thread = thread::Builder::new()
            .name(name)
            .spawn(move || Self::run(id, &shared, &stats_clone))
            .map_err(|e| FinderError::spawn_with_source(id, "cannot spawn worker", e))?;

        Ok(Self {
            id,
            thread: Some(thread),
            stats,
        })
    }

    /// Get worker statistics
    pub fn stats(&self) -> Arc<WorkerStats> {
        Arc::clone(&self.stats)
    }

    /// Join the worker thread
    pub fn join(mut self) -> Result<()> {
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| FinderError::join(self.id, "worker thread panicked"))?;
        }
        Ok(())
    }

    /// Main worker loop: idle until a job or shutdown arrives, run the job,
    /// report completion. Exits once shutdown is requested and nothing is pending.
    fn run(id: usize, shared: &Shared, stats: &WorkerStats) {
        #[cfg(feature = "tracing")]
        let worker_span = span!(Level::DEBUG, "worker", id = id);
        #[cfg(feature = "tracing")]
        let _guard = worker_span.enter();

        log::debug!("worker {} started", id);

        while let Some(mut job) = shared.next_job() {
            let fault = Self::execute_job(id, &mut job, stats);
            shared.complete_job(fault);
        }

        log::debug!(
            "worker {} exiting: {} processed, {} failed, {} panicked",
            id,
            stats.get_jobs_processed(),
            stats.get_jobs_failed(),
            stats.get_jobs_panicked()
        );
    }

    /// Execute a single job with panic protection, returning the fault if any
    fn execute_job(id: usize, job: &mut BoxedJob, stats: &WorkerStats) -> Option<FinderError> {
        #[cfg(feature = "tracing")]
        let job_span = span!(Level::DEBUG, "job_execution", job = job.name());
        #[cfg(feature = "tracing")]
        let _job_guard = job_span.enter();

        let start = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(|| job.execute()));
        let elapsed = start.elapsed();
        stats
            .busy_time_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);

        match outcome {
            Ok(Ok(())) => {
                stats.jobs_processed.fetch_add(1, Ordering::Relaxed);
                log::trace!("worker {} finished {} in {:?}", id, job.name(), elapsed);
                None
            }
            Ok(Err(e)) => {
                stats.jobs_failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("worker {}: job {} failed: {}", id, job.name(), e);
                Some(e)
            }
            Err(panic_info) => {
                stats.jobs_panicked.fetch_add(1, Ordering::Relaxed);
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                log::error!("worker {}: job {} panicked: {}", id, job.name(), panic_msg);
                Some(FinderError::worker_panic(
                    id,
                    format!("job {} panicked: {}", job.name(), panic_msg),
                ))
            }
        }
    }
}

/// Join every worker, logging each join failure and returning the first.
pub(crate) fn join_all<I>(workers: I) -> Result<()>
where
    I: IntoIterator<Item = Worker>,
{
    let mut result = Ok(());
    for worker in workers {
        if let Err(e) = worker.join() {
            log::error!("{}", e);
            if result.is_ok() {
                result = Err(e);
            }
        }
    }
    result
}
