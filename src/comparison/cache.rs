use std::{
    collections::{HashMap, VecDeque},
    hash::{DefaultHasher, Hash, Hasher},
    sync::{Arc, Mutex, PoisonError},
};

use log::trace;

use crate::{comparison::Comparison, comparison::compare_with_config, config::ComparisonConfig};

/// Memoizes comparisons by their `(original, ocr)` text pair so re-rendering
/// the same pair doesn't realign it.
///
/// The cache holds at most `cache_capacity` comparisons (from its
/// configuration) and evicts the oldest entry first. It can be shared between
/// threads; the alignment itself runs without holding the lock.
#[derive(Debug)]
pub struct ComparisonCache {
    config: ComparisonConfig,
    entries: Mutex<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    by_key: HashMap<CacheKey, Entry>,
    insertion_order: VecDeque<CacheKey>,
}

#[derive(Debug)]
struct Entry {
    original: String,
    ocr: String,
    comparison: Arc<Comparison>,
}

/// Process-local fingerprint of a text pair. `DefaultHasher` output may change
/// between Rust releases, so keys must never be persisted or shared between
/// processes. Entries also keep the texts they were built from, so a colliding
/// fingerprint is treated as a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey(u64);

impl CacheKey {
    fn new(original: &str, ocr: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        original.hash(&mut hasher);
        ocr.hash(&mut hasher);
        CacheKey(hasher.finish())
    }
}

impl Default for ComparisonCache {
    fn default() -> Self { Self::new(ComparisonConfig::default()) }
}

impl ComparisonCache {
    #[must_use]
    pub fn new(config: ComparisonConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(Entries::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ComparisonConfig { &self.config }

    /// Return the cached comparison of the pair or compute and remember it.
    pub fn get_or_compare(&self, original: &str, ocr: &str) -> Arc<Comparison> {
        let key = CacheKey::new(original, ocr);

        if let Some(comparison) = self.lookup(key, original, ocr) {
            trace!("Comparison cache hit for {key:?}");
            return comparison;
        }

        trace!("Comparison cache miss for {key:?}");
        let comparison = Arc::new(compare_with_config(original, ocr, &self.config));
        self.store(key, original, ocr, Arc::clone(&comparison));

        comparison
    }

    #[must_use]
    pub fn len(&self) -> usize { self.lock().by_key.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.by_key.clear();
        entries.insertion_order.clear();
    }

    fn lookup(&self, key: CacheKey, original: &str, ocr: &str) -> Option<Arc<Comparison>> {
        self.lock()
            .by_key
            .get(&key)
            .filter(|entry| entry.original == original && entry.ocr == ocr)
            .map(|entry| Arc::clone(&entry.comparison))
    }

    fn store(&self, key: CacheKey, original: &str, ocr: &str, comparison: Arc<Comparison>) {
        if self.config.cache_capacity == 0 {
            return;
        }

        let mut entries = self.lock();
        if !entries.by_key.contains_key(&key) {
            while entries.by_key.len() >= self.config.cache_capacity {
                let Some(oldest) = entries.insertion_order.pop_front() else {
                    break;
                };
                trace!("Evicting {oldest:?} from the comparison cache");
                entries.by_key.remove(&oldest);
            }
            entries.insertion_order.push_back(key);
        }

        entries.by_key.insert(
            key,
            Entry {
                original: original.to_owned(),
                ocr: ocr.to_owned(),
                comparison,
            },
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        // entries are only ever replaced whole
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::comparison::compare;

    fn cache_with_capacity(cache_capacity: usize) -> ComparisonCache {
        ComparisonCache::new(ComparisonConfig {
            cache_capacity,
            ..ComparisonConfig::default()
        })
    }

    #[test]
    fn test_repeated_pairs_are_shared() {
        let cache = ComparisonCache::default();

        let first = cache.get_or_compare("the quick fox", "the quick brown fox");
        let second = cache.get_or_compare("the quick fox", "the quick brown fox");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, compare("the quick fox", "the quick brown fox"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_pair_order_matters() {
        let cache = ComparisonCache::default();

        let forward = cache.get_or_compare("a", "a b");
        let backward = cache.get_or_compare("a b", "a");

        assert!(!Arc::ptr_eq(&forward, &backward));
        assert_eq!(forward.stats().inserted, 2);
        assert_eq!(backward.stats().deleted, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_oldest_entry_is_evicted() {
        let cache = cache_with_capacity(2);

        let first = cache.get_or_compare("1", "1");
        cache.get_or_compare("2", "2");
        cache.get_or_compare("3", "3");
        assert_eq!(cache.len(), 2);

        let first_again = cache.get_or_compare("1", "1");
        assert!(!Arc::ptr_eq(&first, &first_again));
        assert_eq!(*first, *first_again);
    }

    #[test]
    fn test_key_depends_on_both_texts_and_their_boundary() {
        assert_eq!(CacheKey::new("a", "b"), CacheKey::new("a", "b"));
        assert_ne!(CacheKey::new("a", "b"), CacheKey::new("b", "a"));
        assert_ne!(CacheKey::new("ab", "c"), CacheKey::new("a", "bc"));
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let cache = cache_with_capacity(0);
        cache.get_or_compare("a", "b");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = ComparisonCache::default();
        cache.get_or_compare("a", "b");
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(ComparisonCache::default());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    cache
                        .get_or_compare("shared original", &format!("shared ocr {}", i % 2))
                        .accuracy()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().value() > 0.0);
        }
        assert_eq!(cache.len(), 2);
    }
}
