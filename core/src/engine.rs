//! Query engine: a dictionary snapshot plus an LRU cache of ranked results.
//!
//! The underlying search is deterministic over an immutable snapshot, so
//! repeated queries (paging, re-submits) can be served from cache. Replacing
//! the snapshot or the configuration clears the cache.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::query::{search, SearchError, SearchResult};
use crate::Config;

pub struct Engine {
    dictionary: Arc<Dictionary>,
    config: Config,
    cache: RefCell<lru::LruCache<String, Vec<SearchResult>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl Engine {
    /// Create an engine over a dictionary snapshot.
    pub fn new(dictionary: Dictionary, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).unwrap());

        Self {
            dictionary: Arc::new(dictionary),
            config,
            cache: RefCell::new(lru::LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Run a ranking query, serving repeats from the LRU cache.
    ///
    /// Only successful results are cached; error conditions are recomputed
    /// (they are cheap and depend on dictionary state).
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let key = query.trim().to_string();

        if let Some(cached) = self.cache.borrow_mut().get(&key) {
            *self.cache_hits.borrow_mut() += 1;
            return Ok(cached.clone());
        }

        let results = search(&self.dictionary, query, &self.config)?;
        *self.cache_misses.borrow_mut() += 1;
        self.cache.borrow_mut().put(key, results.clone());
        Ok(results)
    }

    /// Replace the dictionary snapshot (language change). Cached results
    /// belong to the old snapshot and are discarded.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = Arc::new(dictionary);
        self.clear_cache();
    }

    /// Replace the configuration. Threshold and cap affect result sets, so
    /// the cache is discarded.
    pub fn set_config(&mut self, config: Config) {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).unwrap());
        self.config = config;
        self.cache.borrow_mut().resize(capacity);
        self.clear_cache();
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Cheap shared handle to the current snapshot, e.g. for scoring on
    /// another thread while the engine stays responsive.
    pub fn dictionary_arc(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cache statistics as a (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Cache hit rate in percent; `None` before the first lookup.
    pub fn cache_hit_rate(&self) -> Option<f32> {
        let (hits, misses) = self.cache_stats();
        let total = hits + misses;
        if total == 0 {
            None
        } else {
            Some(hits as f32 / total as f32 * 100.0)
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        let dict = Dictionary::from_text("pat\tpæt\nbat\tbæt\n");
        Engine::new(dict, Config::default())
    }

    #[test]
    fn repeated_queries_hit_the_cache() {
        let engine = engine();
        let first = engine.search("pat").unwrap();
        let second = engine.search("pat").unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.cache_stats(), (1, 1));
    }

    #[test]
    fn errors_are_not_cached() {
        let engine = engine();
        assert!(engine.search("zzz").is_err());
        assert_eq!(engine.cache_stats(), (0, 0));
        assert_eq!(engine.cache_size(), 0);
    }

    #[test]
    fn replacing_dictionary_clears_cache() {
        let mut engine = engine();
        engine.search("pat").unwrap();
        assert_eq!(engine.cache_size(), 1);

        engine.set_dictionary(Dictionary::from_text("mat\tmæt\n"));
        assert_eq!(engine.cache_size(), 0);
        assert_eq!(
            engine.search("pat"),
            Err(SearchError::WordNotFound("pat".to_string()))
        );
    }

    #[test]
    fn query_is_trimmed_before_cache_lookup() {
        let engine = engine();
        engine.search("pat").unwrap();
        engine.search("  pat  ").unwrap();
        assert_eq!(engine.cache_stats(), (1, 1));
    }
}
