//! Purchases against the replicated order service
//!
//! Purchases are load-balanced round-robin and sent exactly once: a
//! failed purchase surfaces immediately and is never replayed on a
//! sibling replica, on any status. A successful purchase then drives
//! cache invalidation so the next info or search sees fresh stock.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ResponseCache};
use crate::catalog::CatalogClient;
use crate::error::ClientError;
use crate::model::PurchaseConfirmation;
use crate::replica::ReplicaPool;
use crate::types::{EndpointUrl, ItemNumber, Topic};

/// Result of a completed purchase
#[derive(Debug, Clone)]
pub struct PurchaseOutcome {
    pub confirmation: PurchaseConfirmation,
    /// Order replica that accepted the purchase
    pub replica: EndpointUrl,
    /// Cache keys that were actually dropped afterwards
    pub invalidated: Vec<CacheKey>,
}

/// Write client for the replicated order service
#[derive(Clone, Debug)]
pub struct OrderClient {
    pool: Arc<ReplicaPool>,
    http: reqwest::Client,
    catalog: CatalogClient,
    cache: ResponseCache,
}

impl OrderClient {
    /// Create a client over an order pool, sharing the catalog client
    /// and cache for post-purchase invalidation
    #[must_use]
    pub fn new(
        pool: Arc<ReplicaPool>,
        http: reqwest::Client,
        catalog: CatalogClient,
        cache: ResponseCache,
    ) -> Self {
        Self {
            pool,
            http,
            catalog,
            cache,
        }
    }

    /// Purchase one item via the next replica in rotation
    ///
    /// On success the `info:<item>` entry is dropped unconditionally,
    /// then a best-effort uncached catalog lookup resolves the item's
    /// topic so `search:<topic>` can be dropped too. Failures in that
    /// follow-up are logged and swallowed; the purchase stands. A failed
    /// purchase leaves the cache untouched.
    pub async fn purchase(&self, item: ItemNumber) -> Result<PurchaseOutcome, ClientError> {
        let endpoint = self.pool.select_next().clone();
        let url = endpoint.join_segments(&["purchase", &item.to_string()]);

        info!(replica = %endpoint, %item, "sending purchase");

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // 404 included: there is no not-found failover for purchases
            let detail = response.text().await.unwrap_or_default();
            return Err(ClientError::Service {
                endpoint,
                status,
                detail,
            });
        }

        let confirmation: PurchaseConfirmation =
            response
                .json()
                .await
                .map_err(|err| ClientError::Service {
                    endpoint: endpoint.clone(),
                    status,
                    detail: format!("undecodable confirmation: {err}"),
                })?;

        let invalidated = self.invalidate_after_purchase(item).await;

        Ok(PurchaseOutcome {
            confirmation,
            replica: endpoint,
            invalidated,
        })
    }

    /// Drop the cache entries a purchase makes stale
    async fn invalidate_after_purchase(&self, item: ItemNumber) -> Vec<CacheKey> {
        let mut dropped = Vec::new();

        let info_key = CacheKey::info(item);
        if self.cache.invalidate(&info_key).await {
            debug!(key = %info_key, "dropped cache entry after purchase");
            dropped.push(info_key);
        } else {
            debug!(key = %info_key, "no cache entry to drop after purchase");
        }

        match self.catalog.lookup_uncached(item).await {
            Ok(detail) => match Topic::new(detail.topic) {
                Ok(topic) => {
                    let search_key = CacheKey::search(topic);
                    if self.cache.invalidate(&search_key).await {
                        debug!(key = %search_key, "dropped cache entry after purchase");
                        dropped.push(search_key);
                    }
                }
                Err(err) => warn!(
                    %item,
                    error = %err,
                    "catalog returned an unusable topic; stale search entries may remain"
                ),
            },
            Err(err) => warn!(
                %item,
                error = %err,
                "could not resolve topic after purchase; stale search entries may remain"
            ),
        }

        dropped
    }

    /// Number of configured order replicas
    #[must_use]
    pub fn replica_count(&self) -> usize {
        self.pool.len()
    }
}
