//! Round-robin replica selection
//!
//! Distributes requests evenly across a fixed set of replicas using an
//! atomic cursor. Simple, predictable, and lock-free. The configured
//! order is also exposed as a slice for failover scans, which walk every
//! replica themselves and must not disturb the round-robin cursor.

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use crate::error::ClientError;
use crate::types::EndpointUrl;

/// Fixed, ordered set of interchangeable replicas for one service
#[derive(Debug)]
pub struct ReplicaPool {
    /// Service label for logs and errors ("catalog", "order")
    service: &'static str,
    /// Replica base addresses in configured order
    endpoints: Vec<EndpointUrl>,
    /// Round-robin cursor, advanced before every read
    cursor: AtomicUsize,
}

impl ReplicaPool {
    /// Create a pool over a non-empty list of replicas
    pub fn new(service: &'static str, endpoints: Vec<EndpointUrl>) -> Result<Self, ClientError> {
        if endpoints.is_empty() {
            return Err(ClientError::NoReplicas { service });
        }

        Ok(Self {
            service,
            endpoints,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Select the next replica in rotation
    ///
    /// The cursor moves before it is read, so the first call on a fresh
    /// pool returns the second configured replica; N calls on a pool of
    /// N visit every replica exactly once before wrapping.
    pub fn select_next(&self) -> &EndpointUrl {
        let index = self
            .cursor
            .fetch_add(1, Ordering::Relaxed)
            .wrapping_add(1)
            % self.endpoints.len();
        let endpoint = &self.endpoints[index];

        debug!(
            service = self.service,
            replica = %endpoint,
            index,
            "round-robin selected replica"
        );

        endpoint
    }

    /// All replicas in configured order, for full failover scans
    #[must_use]
    #[inline]
    pub fn endpoints(&self) -> &[EndpointUrl] {
        &self.endpoints
    }

    /// Service label this pool belongs to
    #[must_use]
    #[inline]
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Number of configured replicas
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always false for a constructed pool
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
