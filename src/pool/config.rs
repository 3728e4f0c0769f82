//! Work queue configuration

use crate::core::{FinderError, Result};
use serde::Serialize;

/// Configuration for a [`WorkQueue`](crate::pool::WorkQueue)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkQueueConfig {
    /// Number of worker threads spawned at construction
    pub num_threads: usize,
    /// Thread name prefix; workers are named `{prefix}-{id}`
    pub thread_name_prefix: String,
}

impl Default for WorkQueueConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            thread_name_prefix: "prime-worker".to_string(),
        }
    }
}

impl WorkQueueConfig {
    /// Create a new configuration with the specified number of threads.
    ///
    /// `0` is kept as-is and rejected by [`validate`](Self::validate).
    #[must_use]
    pub fn new(num_threads: usize) -> Self {
        Self {
            num_threads,
            ..Default::default()
        }
    }

    /// Set thread name prefix
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(FinderError::invalid_config(
                "num_threads",
                "Number of threads must be greater than 0",
            ));
        }
        if self.thread_name_prefix.trim().is_empty() {
            return Err(FinderError::invalid_config(
                "thread_name_prefix",
                "Thread name prefix must not be empty",
            ));
        }
        Ok(())
    }

    pub(crate) fn thread_name(&self, id: usize) -> String {
        format!("{}-{}", self.thread_name_prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkQueueConfig::default();
        assert_eq!(config.num_threads, num_cpus::get());
        assert_eq!(config.thread_name_prefix, "prime-worker");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = WorkQueueConfig::new(0).validate().unwrap_err();
        assert!(
            matches!(err, FinderError::InvalidConfig { ref parameter, .. } if parameter == "num_threads")
        );
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let err = WorkQueueConfig::new(2)
            .with_thread_name_prefix("  ")
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_thread_name() {
        let config = WorkQueueConfig::new(3).with_thread_name_prefix("scan");
        assert_eq!(config.thread_name(2), "scan-2");
    }
}
