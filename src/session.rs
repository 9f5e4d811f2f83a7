//! Interactive session façade
//!
//! Owns both replica pools, the response cache, and both clients for
//! one interactive run. The shell talks only to this type, handing it
//! raw user strings; parsing and validation happen here, before any
//! cache or network activity. One command runs at a time (see the shell
//! loop), so pool cursors and cache entries are mutated sequentially.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::cache::{CacheStats, ResponseCache};
use crate::catalog::{CatalogClient, InfoOutcome, SearchOutcome};
use crate::config::Config;
use crate::error::ClientError;
use crate::failover::FailoverExecutor;
use crate::order::{OrderClient, PurchaseOutcome};
use crate::replica::ReplicaPool;
use crate::types::{ItemNumber, SessionId, Topic};

/// One interactive session against the bookstore
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    catalog: CatalogClient,
    order: OrderClient,
    cache: ResponseCache,
}

impl Session {
    /// Build a session from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        let catalog_pool = Arc::new(
            ReplicaPool::new("catalog", config.catalog_endpoints())
                .context("building catalog replica pool")?,
        );
        let order_pool = Arc::new(
            ReplicaPool::new("order", config.order_endpoints())
                .context("building order replica pool")?,
        );

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.client.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("building HTTP client")?;

        let cache = ResponseCache::new();
        let catalog = CatalogClient::new(
            catalog_pool,
            cache.clone(),
            FailoverExecutor::new(http.clone()),
        );
        let order = OrderClient::new(order_pool, http, catalog.clone(), cache.clone());

        let id = SessionId::new();
        debug!(session = %id.short(), "session created");

        Ok(Self {
            id,
            catalog,
            order,
            cache,
        })
    }

    /// Search the catalog; `raw_topic` comes straight from the prompt
    pub async fn search(&self, raw_topic: &str) -> Result<SearchOutcome, ClientError> {
        let topic = Topic::new(raw_topic.trim().to_string())?;
        debug!(session = %self.id.short(), %topic, "search");
        self.catalog.search(&topic).await
    }

    /// Fetch item details; `raw_item` comes straight from the prompt
    pub async fn info(&self, raw_item: &str) -> Result<InfoOutcome, ClientError> {
        let item: ItemNumber = raw_item.parse()?;
        debug!(session = %self.id.short(), %item, "info");
        self.catalog.info(item).await
    }

    /// Purchase an item; `raw_item` comes straight from the prompt
    pub async fn purchase(&self, raw_item: &str) -> Result<PurchaseOutcome, ClientError> {
        let item: ItemNumber = raw_item.parse()?;
        debug!(session = %self.id.short(), %item, "purchase");
        self.order.purchase(item).await
    }

    /// Current cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Session identifier for log correlation
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Catalog client, shared with tests
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Order client, shared with tests
    #[must_use]
    pub fn order(&self) -> &OrderClient {
        &self.order
    }

    /// The session's response cache
    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Replica counts as (catalog, order), for the startup banner
    #[must_use]
    pub fn replica_counts(&self) -> (usize, usize) {
        (self.catalog.replica_count(), self.order.replica_count())
    }

    /// Human-readable request timeout, for the startup banner
    #[must_use]
    pub fn describe_timeout(config: &Config) -> String {
        match config.client.request_timeout() {
            Some(timeout) => format!("{}s", timeout.as_secs()),
            None => "none".to_string(),
        }
    }
}
