//! Cache-first catalog reads
//!
//! Search and info queries consult the response cache before the
//! network; a hit answers with zero network I/O. Misses go through the
//! failover executor and populate the cache with the winning replica's
//! payload. Every answer is attributed to its source so the shell can
//! show where it came from.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheKey, CachedPayload, CachedResponse, ResponseCache};
use crate::error::ClientError;
use crate::failover::FailoverExecutor;
use crate::model::{BookDetail, BookSummary};
use crate::replica::ReplicaPool;
use crate::types::{EndpointUrl, ItemNumber, Topic};

/// Where an answer came from
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSource {
    /// Served from the local cache without any network attempt
    Cache { origin: EndpointUrl, age: Duration },
    /// Served by a replica during this request
    Replica(EndpointUrl),
}

impl ResponseSource {
    #[must_use]
    pub const fn is_cache(&self) -> bool {
        matches!(self, Self::Cache { .. })
    }
}

impl fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache { origin, age } => {
                write!(f, "cache, {}s old, origin {}", age.as_secs(), origin)
            }
            Self::Replica(endpoint) => write!(f, "{}", endpoint),
        }
    }
}

/// Result of a topic search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub books: Vec<BookSummary>,
    pub source: ResponseSource,
}

/// Result of an item info lookup
#[derive(Debug, Clone)]
pub struct InfoOutcome {
    pub book: BookDetail,
    pub source: ResponseSource,
}

/// Read client for the replicated catalog service
#[derive(Clone, Debug)]
pub struct CatalogClient {
    pool: Arc<ReplicaPool>,
    cache: ResponseCache,
    executor: FailoverExecutor,
}

impl CatalogClient {
    /// Create a client over a catalog pool and a shared cache
    #[must_use]
    pub fn new(pool: Arc<ReplicaPool>, cache: ResponseCache, executor: FailoverExecutor) -> Self {
        Self {
            pool,
            cache,
            executor,
        }
    }

    /// Search the catalog by topic, cache first
    pub async fn search(&self, topic: &Topic) -> Result<SearchOutcome, ClientError> {
        let key = CacheKey::search(topic.clone());

        if let Some(entry) = self.cache.get(&key).await {
            if let Some(books) = entry.payload().as_search() {
                debug!(key = %key, "cache hit");
                return Ok(SearchOutcome {
                    books: books.to_vec(),
                    source: ResponseSource::Cache {
                        origin: entry.origin().clone(),
                        age: entry.age(),
                    },
                });
            }
        }

        debug!(key = %key, "cache miss");
        let (books, origin): (Vec<BookSummary>, _) = self
            .executor
            .execute(&self.pool, &["search", topic.as_str()])
            .await?;

        self.cache
            .insert(
                key,
                CachedResponse::new(CachedPayload::Search(books.clone()), origin.clone()),
            )
            .await;

        Ok(SearchOutcome {
            books,
            source: ResponseSource::Replica(origin),
        })
    }

    /// Fetch details for one item, cache first
    pub async fn info(&self, item: ItemNumber) -> Result<InfoOutcome, ClientError> {
        let key = CacheKey::info(item);

        if let Some(entry) = self.cache.get(&key).await {
            if let Some(book) = entry.payload().as_info() {
                debug!(key = %key, "cache hit");
                return Ok(InfoOutcome {
                    book: book.clone(),
                    source: ResponseSource::Cache {
                        origin: entry.origin().clone(),
                        age: entry.age(),
                    },
                });
            }
        }

        debug!(key = %key, "cache miss");
        let (book, origin): (BookDetail, _) = self
            .executor
            .execute(&self.pool, &["info", &item.to_string()])
            .await?;

        self.cache
            .insert(
                key,
                CachedResponse::new(CachedPayload::Info(book.clone()), origin.clone()),
            )
            .await;

        Ok(InfoOutcome {
            book,
            source: ResponseSource::Replica(origin),
        })
    }

    /// Fetch details for one item without touching the cache
    ///
    /// The purchase workflow invalidates `info:<item>` and then needs
    /// the item's topic to invalidate its search entry too; fetching
    /// through [`CatalogClient::info`] would re-populate the entry it
    /// just dropped.
    pub async fn lookup_uncached(&self, item: ItemNumber) -> Result<BookDetail, ClientError> {
        let (book, _origin): (BookDetail, _) = self
            .executor
            .execute(&self.pool, &["info", &item.to_string()])
            .await?;
        Ok(book)
    }

    /// Number of configured catalog replicas
    #[must_use]
    pub fn replica_count(&self) -> usize {
        self.pool.len()
    }
}
