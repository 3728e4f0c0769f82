//! Core types and traits shared by the work queue and the prime search

pub mod error;
pub mod job;

pub use error::{FinderError, Result};
pub use job::{BoxedJob, ClosureJob, Job};
