//! Memoization table used for per-pass point resolution.
//!
//! The cache does not evict: owners clear it whenever the values it holds may have gone stale
//! (for the arranger, at the top of every layout pass).

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Key -> value cache whose key is derived from the lookup argument by a projection function.
pub struct MemoCache<A: ?Sized, K, V> {
    key_of: Box<dyn Fn(&A) -> K + Send + Sync>,
    entries: FxHashMap<K, V>,
    stats: CacheStats,
}

impl<A: ?Sized, K, V> fmt::Debug for MemoCache<A, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<A: ?Sized, K, V> MemoCache<A, K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new<F>(key_of: F) -> Self
    where
        F: Fn(&A) -> K + Send + Sync + 'static,
    {
        Self {
            key_of: Box::new(key_of),
            entries: FxHashMap::default(),
            stats: CacheStats::default(),
        }
    }

    /// Looks `arg` up, counting a hit or a miss.
    pub fn get(&mut self, arg: &A) -> Option<V> {
        let key = (self.key_of)(arg);
        match self.entries.get(&key) {
            Some(v) => {
                self.stats.hits += 1;
                Some(v.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, arg: &A, value: V) {
        let key = (self.key_of)(arg);
        self.entries.insert(key, value);
    }

    pub fn get_or_insert_with<F>(&mut self, arg: &A, compute: F) -> V
    where
        F: FnOnce(&A) -> V,
    {
        if let Some(v) = self.get(arg) {
            return v;
        }
        let v = compute(arg);
        self.insert(arg, v.clone());
        v
    }

    /// Drops every entry. Hit/miss counters are cumulative and survive a clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CacheStats, MemoCache};

    #[test]
    fn projection_decides_identity() {
        let mut cache: MemoCache<str, usize, String> = MemoCache::new(|s: &str| s.len());
        assert_eq!(cache.get_or_insert_with("abc", |s| s.to_uppercase()), "ABC");
        // Same projected key, so the first value is served.
        assert_eq!(cache.get_or_insert_with("xyz", |s| s.to_uppercase()), "ABC");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn clear_keeps_counters() {
        let mut cache: MemoCache<u32, u32, u32> = MemoCache::new(|v: &u32| *v);
        cache.insert(&1, 10);
        assert_eq!(cache.get(&1), Some(10));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
