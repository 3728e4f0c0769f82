//! Error types for the prime finder

/// Result type for prime finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Errors that can occur while searching for primes
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FinderError {
    /// The requested search range is invalid
    #[error("Invalid range [{start}, {end}]: {message}")]
    InvalidRange {
        /// First value of the range
        start: i64,
        /// Last value of the range
        end: i64,
        /// Error message
        message: String,
    },

    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// Work queue is shutting down and no longer accepts jobs
    #[error("Work queue is shutting down ({pending_jobs} jobs pending)")]
    ShuttingDown {
        /// Number of pending jobs
        pending_jobs: usize,
    },

    /// Failed to spawn a worker thread with details
    #[error("Failed to spawn worker thread #{thread_id}: {message}")]
    SpawnError {
        /// ID of the thread that failed to spawn
        thread_id: usize,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to join a worker thread
    #[error("Failed to join worker thread #{thread_id}: {message}")]
    JoinError {
        /// ID of the thread that failed to join
        thread_id: usize,
        /// Error message
        message: String,
    },

    /// Job execution failed with job details
    #[error("Job execution failed (job_id: {job_id}): {message}")]
    ExecutionError {
        /// ID of the failed job
        job_id: String,
        /// Error message
        message: String,
    },

    /// Worker panic with details
    #[error("Worker thread #{thread_id} panicked: {message}")]
    WorkerPanic {
        /// ID of the panicked thread
        thread_id: usize,
        /// Panic message
        message: String,
    },
}

impl FinderError {
    /// Create an invalid range error
    pub fn invalid_range(start: i64, end: i64, message: impl Into<String>) -> Self {
        FinderError::InvalidRange {
            start,
            end,
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        FinderError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a shutting down error
    pub fn shutting_down(pending_jobs: usize) -> Self {
        FinderError::ShuttingDown { pending_jobs }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(
        thread_id: usize,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        FinderError::SpawnError {
            thread_id,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a join error
    pub fn join(thread_id: usize, message: impl Into<String>) -> Self {
        FinderError::JoinError {
            thread_id,
            message: message.into(),
        }
    }

    /// Create an execution error
    pub fn execution(job_id: impl Into<String>, message: impl Into<String>) -> Self {
        FinderError::ExecutionError {
            job_id: job_id.into(),
            message: message.into(),
        }
    }

    /// Create a worker panic error
    pub fn worker_panic(thread_id: usize, message: impl Into<String>) -> Self {
        FinderError::WorkerPanic {
            thread_id,
            message: message.into(),
        }
    }

    /// Whether the error was raised while validating caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FinderError::InvalidRange { .. } | FinderError::InvalidConfig { .. }
        )
    }
}
