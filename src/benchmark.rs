//! Wall-clock timing of a search strategy.
//!
//! A strategy is any closure; the harness runs it for a number of warmup
//! rounds, then times a number of measured rounds and reports the mean.

use std::time::{Duration, Instant};

/// Warmup rounds used by [`benchmark_default`]
pub const WARMUP_ROUNDS: u32 = 10;
/// Timed rounds used by [`benchmark_default`]
pub const TIMED_ROUNDS: u32 = 20;

/// Run `strategy` `warmup` times untimed, then `rounds` times timed, and
/// return the mean duration of a timed round.
///
/// `rounds == 0` yields [`Duration::ZERO`].
pub fn benchmark<F>(warmup: u32, rounds: u32, mut strategy: F) -> Duration
where
    F: FnMut(),
{
    for _ in 0..warmup {
        strategy();
    }
    if rounds == 0 {
        return Duration::ZERO;
    }

    let start = Instant::now();
    for _ in 0..rounds {
        strategy();
    }
    let mean = start.elapsed() / rounds;
    log::debug!("benchmark: {} rounds, mean {:?}", rounds, mean);
    mean
}

/// [`benchmark`] with [`WARMUP_ROUNDS`] and [`TIMED_ROUNDS`]
pub fn benchmark_default<F: FnMut()>(strategy: F) -> Duration {
    benchmark(WARMUP_ROUNDS, TIMED_ROUNDS, strategy)
}
