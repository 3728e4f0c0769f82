//! Sequential primality test and range scan

use crate::core::{FinderError, Result};
use std::collections::BTreeSet;

/// Determine whether `n` is prime by checking every candidate divisor.
///
/// Deliberately slow: divisors are tried from `n - 1` down to `2`, with no
/// square-root bound, so the scan is expensive enough to be worth spreading
/// across threads.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    !(2..n).rev().any(|divisor| n % divisor == 0)
}

/// Check that `[start, end]` is a valid, non-negative search range.
pub fn validate_range(start: i64, end: i64) -> Result<()> {
    if start < 0 {
        return Err(FinderError::invalid_range(
            start,
            end,
            "Starting value must be greater than 0.",
        ));
    }
    if end < start {
        return Err(FinderError::invalid_range(
            start,
            end,
            "Ending value must be greater than starting value.",
        ));
    }
    Ok(())
}

/// Return every prime in `[start, end]`, scanning sequentially.
///
/// # Errors
///
/// [`FinderError::InvalidRange`] if `start < 0` or `end < start`.
pub fn trial_division(start: i64, end: i64) -> Result<BTreeSet<i64>> {
    validate_range(start, end)?;
    Ok((start..=end).filter(|&n| is_prime(n)).collect())
}
