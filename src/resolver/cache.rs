//! Memoization for image resolution
//!
//! The cache only ever stores what the resolver would compute anyway, so a
//! resolver built with [`NoopResolutionCache`] returns exactly the same URLs
//! as one backed by [`MemoryResolutionCache`]. Entries are never evicted.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// Arguments of a single resolution call
///
/// Kept as separate fields so that titles or categories containing `-`
/// cannot collide when joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub title: String,
    pub category: String,
    pub provided_url: String,
}

impl ResolutionKey {
    pub fn new(title: &str, category: &str, provided_url: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            provided_url: provided_url.unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.title, self.category, self.provided_url)
    }
}

/// Storage backend for resolved image URLs
pub trait ResolutionCache: Send + Sync {
    /// Previously resolved URL for these arguments
    fn get(&self, key: &ResolutionKey) -> Option<String>;

    /// Record a resolved URL
    fn insert(&self, key: ResolutionKey, image_url: String);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-process map
#[derive(Debug, Default)]
pub struct MemoryResolutionCache {
    entries: RwLock<HashMap<ResolutionKey, String>>,
}

impl MemoryResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResolutionCache for MemoryResolutionCache {
    fn get(&self, key: &ResolutionKey) -> Option<String> {
        // A poisoned map still only holds complete entries.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn insert(&self, key: ResolutionKey, image_url: String) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.entry(key).or_insert(image_url);
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

/// Cache that stores nothing; every call recomputes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolutionCache;

impl ResolutionCache for NoopResolutionCache {
    fn get(&self, _key: &ResolutionKey) -> Option<String> {
        None
    }

    fn insert(&self, _key: ResolutionKey, _image_url: String) {}

    fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_with_dashes_do_not_collide() {
        let a = ResolutionKey::new("a-b", "c", None);
        let b = ResolutionKey::new("a", "b-c", None);
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);

        let cache = MemoryResolutionCache::new();
        cache.insert(a.clone(), "first".to_string());
        cache.insert(b.clone(), "second".to_string());
        assert_eq!(cache.get(&a).as_deref(), Some("first"));
        assert_eq!(cache.get(&b).as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_and_empty_url_share_a_key() {
        assert_eq!(
            ResolutionKey::new("Ramen", "Asian", None),
            ResolutionKey::new("Ramen", "Asian", Some(""))
        );
    }

    #[test]
    fn test_first_insert_is_kept() {
        let cache = MemoryResolutionCache::new();
        let key = ResolutionKey::new("Ramen", "Asian", None);
        cache.insert(key.clone(), "one".to_string());
        cache.insert(key.clone(), "two".to_string());
        assert_eq!(cache.get(&key).as_deref(), Some("one"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_noop_cache_never_stores() {
        let cache = NoopResolutionCache;
        let key = ResolutionKey::new("Ramen", "Asian", None);
        cache.insert(key.clone(), "one".to_string());
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }
}
