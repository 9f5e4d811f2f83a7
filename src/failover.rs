//! Failover execution of catalog reads across replicas
//!
//! A read is tried against every replica in configured order. Only an
//! HTTP 404 moves the scan to the next replica; backing data may be
//! partially replicated and a sibling can still hold the item. Any other
//! failure aborts the scan immediately. The full scan is a separate
//! policy from [`ReplicaPool::select_next`] round-robin; purchases use
//! the cursor and never come through here.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::replica::ReplicaPool;
use crate::types::EndpointUrl;

/// Classified result of one replica attempt
#[derive(Debug)]
pub enum RequestOutcome<T> {
    /// 2xx with a decodable body; the scan stops here
    Success { payload: T, origin: EndpointUrl },
    /// HTTP 404; the next replica in configured order may still have it
    NotFoundSkip,
    /// Transport or server failure; aborts the scan unconditionally
    Fatal(ClientError),
}

/// Issues GET requests against a pool with not-found failover
#[derive(Clone, Debug)]
pub struct FailoverExecutor {
    http: reqwest::Client,
}

impl FailoverExecutor {
    /// Create an executor over a shared HTTP client
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch `segments` (e.g. `["search", topic]`) from the first
    /// replica that has it
    ///
    /// Returns the decoded payload and the replica that served it, or
    /// the first fatal error, or [`ClientError::NotFoundOnAllReplicas`]
    /// once every replica has answered 404. An empty-but-successful
    /// result set decodes like any other success and ends the scan.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        pool: &ReplicaPool,
        segments: &[&str],
    ) -> Result<(T, EndpointUrl), ClientError> {
        let request = segments.join("/");

        for endpoint in pool.endpoints() {
            match self.try_replica(endpoint, segments).await {
                RequestOutcome::Success { payload, origin } => {
                    debug!(
                        service = pool.service(),
                        replica = %origin,
                        request = %request,
                        "request served"
                    );
                    return Ok((payload, origin));
                }
                RequestOutcome::NotFoundSkip => {
                    debug!(
                        service = pool.service(),
                        replica = %endpoint,
                        request = %request,
                        "replica reported not found, trying next"
                    );
                }
                RequestOutcome::Fatal(err) => {
                    warn!(
                        service = pool.service(),
                        replica = %endpoint,
                        request = %request,
                        error = %err,
                        "aborting replica scan"
                    );
                    return Err(err);
                }
            }
        }

        Err(ClientError::NotFoundOnAllReplicas {
            request,
            replicas_tried: pool.len(),
        })
    }

    /// Issue one GET against one replica and classify the response
    pub async fn try_replica<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointUrl,
        segments: &[&str],
    ) -> RequestOutcome<T> {
        let url = endpoint.join_segments(segments);

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(source) => {
                return RequestOutcome::Fatal(ClientError::Transport {
                    endpoint: endpoint.clone(),
                    source,
                });
            }
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return RequestOutcome::NotFoundSkip;
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return RequestOutcome::Fatal(ClientError::Service {
                endpoint: endpoint.clone(),
                status,
                detail,
            });
        }

        match response.json::<T>().await {
            Ok(payload) => RequestOutcome::Success {
                payload,
                origin: endpoint.clone(),
            },
            // A replica answering 2xx with garbage is faulty, not missing data
            Err(err) => RequestOutcome::Fatal(ClientError::Service {
                endpoint: endpoint.clone(),
                status,
                detail: format!("undecodable body: {err}"),
            }),
        }
    }
}
