//! Memoization of lazily computed values.

use crate::common::*;

/// A concurrent map whose entries are computed at most once per key and
/// never replaced.
///
/// The computation runs without holding any lock. If two callers race on
/// the same key, both compute, the first insertion wins, and both get the
/// stored value back.
#[derive(Debug)]
pub struct WriteOnceCache<K, V>
where
    K: Eq + Hash,
{
    map: DashMap<K, V>,
}

impl<K, V> WriteOnceCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).map(|entry| entry.value().clone())
    }

    /// Get the cached value, or compute and store it on a miss.
    ///
    /// Errors are returned as is and leave the key vacant.
    pub fn get_or_try_insert_with<F, E>(&self, key: K, f: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = f()?;
        let stored = self.map.entry(key).or_insert(value);
        Ok(stored.value().clone())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> Default for WriteOnceCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, sync::Arc, thread};

    #[test]
    fn compute_once_per_key() {
        let cache = WriteOnceCache::new();
        let calls = Cell::new(0);

        let compute = |value: u32| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(value)
        };

        assert_eq!(cache.get_or_try_insert_with(1, || compute(10)), Ok(10));
        assert_eq!(cache.get_or_try_insert_with(1, || compute(20)), Ok(10));
        assert_eq!(cache.get_or_try_insert_with(2, || compute(30)), Ok(30));
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn error_leaves_key_vacant() {
        let cache: WriteOnceCache<u32, u32> = WriteOnceCache::default();

        assert_eq!(cache.get_or_try_insert_with(1, || Err("broken")), Err("broken"));
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_try_insert_with(1, || Ok::<_, ()>(5)), Ok(5));
        assert_eq!(cache.get(&1), Some(5));
    }

    #[test]
    fn concurrent_callers_agree() {
        let cache = Arc::new(WriteOnceCache::new());

        let values: Vec<u32> = (0..8)
            .map(|index| {
                let cache = cache.clone();
                thread::spawn(move || {
                    cache
                        .get_or_try_insert_with(0u32, || Ok::<_, ()>(index))
                        .unwrap()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(values.iter().all_equal());
        assert_eq!(cache.get(&0), Some(values[0]));
    }
}
