//! Shared, order-independent result collection

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A cloneable handle to a sorted set of found values.
///
/// Every clone refers to the same set. Insertion is idempotent and
/// commutative, so workers may insert in any order and from any thread.
#[derive(Clone, Debug, Default)]
pub struct ResultAggregator {
    inner: Arc<Mutex<BTreeSet<i64>>>,
}

impl ResultAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; returns `false` if it was already present
    pub fn insert(&self, value: i64) -> bool {
        self.inner.lock().insert(value)
    }

    /// Insert a batch of values under a single lock acquisition
    pub fn extend<I: IntoIterator<Item = i64>>(&self, values: I) {
        self.inner.lock().extend(values);
    }

    /// Number of distinct values collected
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the current contents in ascending order
    pub fn snapshot(&self) -> BTreeSet<i64> {
        self.inner.lock().clone()
    }

    /// Consume the handle and return the contents in ascending order.
    ///
    /// Copies only if other handles are still alive.
    pub fn into_sorted(self) -> BTreeSet<i64> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_is_idempotent() {
        let results = ResultAggregator::new();
        assert!(results.is_empty());
        assert!(results.insert(7));
        assert!(!results.insert(7));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_sorted_output() {
        let results = ResultAggregator::new();
        results.extend([13, 2, 7, 3, 2]);
        assert_eq!(
            results.into_sorted().into_iter().collect::<Vec<_>>(),
            vec![2, 3, 7, 13]
        );
    }

    #[test]
    fn test_into_sorted_with_live_clone() {
        let results = ResultAggregator::new();
        let other = results.clone();
        other.insert(5);
        assert_eq!(results.into_sorted(), BTreeSet::from([5]));
        assert_eq!(other.snapshot(), BTreeSet::from([5]));
    }

    #[test]
    fn test_concurrent_inserts_match_serial() {
        let results = ResultAggregator::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let results = results.clone();
                thread::spawn(move || {
                    // overlapping values from every thread, inserted in different orders
                    for i in 0..100 {
                        results.insert((i * (t + 1)) % 100);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        let expected: BTreeSet<i64> = (0..8)
            .flat_map(|t| (0..100).map(move |i| (i * (t + 1)) % 100))
            .collect();
        assert_eq!(results.into_sorted(), expected);
    }
}
