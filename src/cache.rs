//! Response caching for catalog queries
//!
//! Successful search and info responses are kept in memory under
//! namespaced keys (`search:<topic>`, `info:<item>`) until they are
//! explicitly invalidated by the purchase workflow or the process exits.
//! There is no TTL and no capacity eviction; the catalog is small and
//! staleness is handled by invalidation, not expiry.

use moka::future::Cache;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::model::{BookDetail, BookSummary};
use crate::types::{EndpointUrl, ItemNumber, Topic};

/// Namespaced cache key for one catalog query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Topic search, rendered `search:<topic>`
    Search(Topic),
    /// Item info, rendered `info:<item>`
    Info(ItemNumber),
}

impl CacheKey {
    /// Key for a topic search
    #[must_use]
    pub fn search(topic: Topic) -> Self {
        Self::Search(topic)
    }

    /// Key for an item info lookup
    #[must_use]
    pub const fn info(item: ItemNumber) -> Self {
        Self::Info(item)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(topic) => write!(f, "search:{}", topic),
            Self::Info(item) => write!(f, "info:{}", item),
        }
    }
}

/// Deserialized payload stored under a cache key
///
/// The variant always matches the key namespace it was stored under;
/// the accessors return `None` on a mismatch so a corrupt entry reads
/// as a miss instead of a wrong answer.
#[derive(Debug, Clone)]
pub enum CachedPayload {
    Search(Vec<BookSummary>),
    Info(BookDetail),
}

impl CachedPayload {
    #[must_use]
    pub fn as_search(&self) -> Option<&[BookSummary]> {
        match self {
            Self::Search(books) => Some(books),
            Self::Info(_) => None,
        }
    }

    #[must_use]
    pub fn as_info(&self) -> Option<&BookDetail> {
        match self {
            Self::Info(detail) => Some(detail),
            Self::Search(_) => None,
        }
    }
}

/// One cached response with its provenance
#[derive(Debug, Clone)]
pub struct CachedResponse {
    payload: CachedPayload,
    /// Replica that served the response originally
    origin: EndpointUrl,
    inserted_at: Instant,
}

impl CachedResponse {
    /// Record a response served by `origin` right now
    #[must_use]
    pub fn new(payload: CachedPayload, origin: EndpointUrl) -> Self {
        Self {
            payload,
            origin,
            inserted_at: Instant::now(),
        }
    }

    #[must_use]
    #[inline]
    pub fn payload(&self) -> &CachedPayload {
        &self.payload
    }

    #[must_use]
    #[inline]
    pub fn origin(&self) -> &EndpointUrl {
        &self.origin
    }

    /// How long ago this entry was inserted
    #[must_use]
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }
}

/// Cache statistics for the `cache stats` shell command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub entry_count: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

/// In-memory response cache shared by the catalog and order clients
#[derive(Clone, Debug)]
pub struct ResponseCache {
    cache: Arc<Cache<CacheKey, CachedResponse>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl ResponseCache {
    /// Create an empty cache with no TTL and no capacity bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Cache::builder().build()),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Look up a cached response, counting a hit or miss
    pub async fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        let result = self.cache.get(key).await;

        if result.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        result
    }

    /// Insert or overwrite the entry for a key
    pub async fn insert(&self, key: CacheKey, response: CachedResponse) {
        self.cache.insert(key, response).await;
    }

    /// Drop the entry for a key, reporting whether one was removed
    ///
    /// Invalidating an absent key is a no-op, not an error; the second
    /// of two back-to-back invalidations returns `false`.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.cache.remove(key).await.is_some()
    }

    /// Current number of cached entries
    #[must_use]
    #[inline]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Cache hit rate as percentage (0.0 to 100.0)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.sync().await;
        CacheStats {
            entry_count: self.cache.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }

    /// Run pending background tasks (for deterministic entry counts)
    ///
    /// Moka performs maintenance asynchronously; entry counts are only
    /// exact after pending tasks complete.
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
