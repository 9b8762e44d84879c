//! Recipe image resolution
//!
//! Picks the image to render for a recipe, in priority order:
//!
//! 1. a well-formed caller supplied URL
//! 2. an exact dish title match
//! 3. a fuzzy (case-insensitive substring, either direction) dish match,
//!    first entry in table order wins
//! 4. the category fallback
//! 5. the `default` category image
//!
//! Resolution never fails; at worst the default image is returned.

use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

use super::cache::{MemoryResolutionCache, NoopResolutionCache, ResolutionCache, ResolutionKey};
use super::tables::{self, DISH_IMAGES};

/// Which rule produced a resolved image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Provided,
    ExactDish,
    FuzzyDish,
    Category,
    Default,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageSource::Provided => "provided",
            ImageSource::ExactDish => "exact_dish",
            ImageSource::FuzzyDish => "fuzzy_dish",
            ImageSource::Category => "category",
            ImageSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// A usable caller supplied URL: non-empty, no `undefined`, starts with `http`
pub fn is_usable_url(url: &str) -> bool {
    !url.is_empty() && !url.contains("undefined") && url.starts_with("http")
}

/// Run the resolution rules without any caching
pub fn resolve_uncached(
    title: &str,
    category: &str,
    provided_url: Option<&str>,
) -> (String, ImageSource) {
    if let Some(url) = provided_url.filter(|url| is_usable_url(url)) {
        return (url.to_string(), ImageSource::Provided);
    }

    if let Some(image) = tables::dish_image(title) {
        return (image.to_string(), ImageSource::ExactDish);
    }

    // An empty title is a substring of every key; it must reach the
    // category rules so that load-failure retries get a category image.
    if !title.is_empty() {
        let title_lower = title.to_lowercase();
        for (dish, image) in DISH_IMAGES {
            let dish_lower = dish.to_lowercase();
            if title_lower.contains(&dish_lower) || dish_lower.contains(&title_lower) {
                return (image.to_string(), ImageSource::FuzzyDish);
            }
        }
    }

    if let Some(image) = tables::category_image(category) {
        return (image.to_string(), ImageSource::Category);
    }

    (tables::default_image().to_string(), ImageSource::Default)
}

/// Image resolver with an injectable memoization cache
#[derive(Clone)]
pub struct ImageResolver {
    cache: Arc<dyn ResolutionCache>,
}

impl fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageResolver")
            .field("cached_entries", &self.cache.len())
            .finish()
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(Arc::new(MemoryResolutionCache::new()))
    }
}

impl ImageResolver {
    pub fn new(cache: Arc<dyn ResolutionCache>) -> Self {
        Self { cache }
    }

    /// Resolver that recomputes on every call
    pub fn uncached() -> Self {
        Self::new(Arc::new(NoopResolutionCache))
    }

    /// Process-wide resolver backed by an in-memory cache
    pub fn global() -> &'static Self {
        static RESOLVER: OnceLock<ImageResolver> = OnceLock::new();
        RESOLVER.get_or_init(ImageResolver::default)
    }

    /// Resolve the image URL to display for a recipe
    pub fn resolve(&self, title: &str, category: &str, provided_url: Option<&str>) -> String {
        let key = ResolutionKey::new(title, category, provided_url);

        if let Some(image_url) = self.cache.get(&key) {
            debug!(key = %key, "Image resolution cache hit");
            return image_url;
        }

        let (image_url, source) = resolve_uncached(title, category, provided_url);
        trace!(key = %key, source = %source, image_url = %image_url, "Resolved recipe image");

        self.cache.insert(key, image_url.clone());
        image_url
    }

    /// Category level image used when the resolved image fails to load
    pub fn resolve_fallback(&self, category: &str) -> String {
        self.resolve("", category, None)
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

/// Resolve through the process-wide resolver
pub fn resolve_image(title: &str, category: &str, provided_url: Option<&str>) -> String {
    ImageResolver::global().resolve(title, category, provided_url)
}
