//! Prime search: the sequential scan and its parallel counterpart

pub mod aggregator;
pub mod finder;
pub mod oracle;
pub mod partition;

pub use aggregator::ResultAggregator;
pub use finder::{find_primes, find_primes_with, Oracle, RangeTask};
pub use oracle::{is_prime, trial_division, validate_range};
pub use partition::{partition, validate_threads};
