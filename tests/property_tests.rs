//! Property-based tests for prime_finder using proptest

use prime_finder::prelude::*;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Partition Tests
// ============================================================================

proptest! {
    /// Chunks cover the range exactly once, in order, with balanced sizes
    #[test]
    fn test_partition_covers_range(
        start in 0i64..10_000,
        width in 0i64..5_000,
        threads in 1usize..64
    ) {
        let end = start + width;
        let chunks = partition(start, end, threads).unwrap();

        let expected_chunks = (threads as i64).min(width + 1) as usize;
        prop_assert_eq!(chunks.len(), expected_chunks);
        prop_assert_eq!(*chunks[0].start(), start);
        prop_assert_eq!(*chunks[chunks.len() - 1].end(), end);

        for pair in chunks.windows(2) {
            prop_assert_eq!(*pair[0].end() + 1, *pair[1].start());
        }

        let sizes: Vec<i64> = chunks.iter().map(|c| c.end() - c.start() + 1).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(min >= 1);
        prop_assert!(max - min <= 1, "unbalanced sizes {:?}", sizes);
    }

    /// Invalid ranges are rejected before any partitioning happens
    #[test]
    fn test_partition_rejects_negative_start(start in -10_000i64..0, threads in 1usize..8) {
        prop_assert!(partition(start, start + 10, threads).is_err());
    }
}

// ============================================================================
// Search Equivalence Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The parallel search matches the sequential scan for any thread count
    #[test]
    fn test_find_primes_matches_trial_division(
        start in 0i64..1_500,
        width in 0i64..500,
        threads in 1usize..9
    ) {
        let end = start + width;
        let expected = trial_division(start, end).unwrap();
        let actual = find_primes(start, end, threads).unwrap();
        prop_assert_eq!(actual, expected);
    }

    /// Inverted ranges fail the same way in both searches
    #[test]
    fn test_inverted_range_rejected(end in 0i64..1_000, gap in 1i64..100, threads in 1usize..4) {
        let start = end + gap;
        prop_assert!(
            matches!(trial_division(start, end), Err(FinderError::InvalidRange { .. })),
            "trial_division accepted [{}, {}]", start, end
        );
        prop_assert!(
            matches!(find_primes(start, end, threads), Err(FinderError::InvalidRange { .. })),
            "find_primes accepted [{}, {}]", start, end
        );
    }
}

// ============================================================================
// Work Queue Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every submitted job runs exactly once before finish() returns
    #[test]
    fn test_every_job_runs_once(threads in 1usize..8, job_count in 0usize..100) {
        let queue = WorkQueue::with_threads(threads).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..job_count {
            let counter_clone = Arc::clone(&counter);
            queue.execute(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }).unwrap();
        }

        queue.finish();
        prop_assert_eq!(counter.load(Ordering::SeqCst), job_count);
        prop_assert_eq!(queue.outstanding(), 0);

        queue.shutdown().unwrap();
        prop_assert_eq!(counter.load(Ordering::SeqCst), job_count);
    }
}
