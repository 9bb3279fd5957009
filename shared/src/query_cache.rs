//! Cache invalidation keyed by logical resource.
//!
//! Mutations emit a [`QueryKey`]; data-fetching views remember the
//! generation they loaded and re-fetch once it moves.

use std::collections::HashMap;

use tracing::debug;

/// Logical resource a view can cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Every page of the article listing.
    ArticleList,
    /// One article.
    ArticleDetail(u64),
    /// The saved-animal listing.
    AnimalList,
}

/// Generation counter per [`QueryKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCache {
    generations: HashMap<QueryKey, u64>,
}

impl QueryCache {
    /// Empty cache, every key at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `key`.
    pub fn generation(&self, key: QueryKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    /// Mark `key` stale and return its new generation.
    pub fn invalidate(&mut self, key: QueryKey) -> u64 {
        let generation = self.generations.entry(key).or_insert(0);
        *generation = generation.wrapping_add(1);
        debug!(?key, generation = *generation, "query invalidated");
        *generation
    }

    /// Whether data loaded at `seen` is out of date.
    pub fn is_stale(&self, key: QueryKey, seen: u64) -> bool {
        self.generation(key) != seen
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryCache, QueryKey};

    #[test]
    fn invalidation_bumps_only_its_key() {
        let mut cache = QueryCache::new();
        assert_eq!(cache.generation(QueryKey::ArticleList), 0);

        assert_eq!(cache.invalidate(QueryKey::ArticleList), 1);
        assert_eq!(cache.invalidate(QueryKey::ArticleList), 2);
        assert_eq!(cache.generation(QueryKey::AnimalList), 0);
        assert_eq!(cache.generation(QueryKey::ArticleDetail(3)), 0);
    }

    #[test]
    fn staleness_tracks_generation() {
        let mut cache = QueryCache::new();
        let seen = cache.generation(QueryKey::ArticleDetail(3));
        assert!(!cache.is_stale(QueryKey::ArticleDetail(3), seen));

        cache.invalidate(QueryKey::ArticleDetail(3));
        assert!(cache.is_stale(QueryKey::ArticleDetail(3), seen));
        assert!(!cache.is_stale(QueryKey::ArticleDetail(4), 0));
    }
}
