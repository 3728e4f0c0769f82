//! Work queue and worker implementations

pub mod config;
pub mod work_queue;
pub mod worker;

pub use config::WorkQueueConfig;
pub use work_queue::{QueueStats, WorkQueue};
pub use worker::{Worker, WorkerStats};
