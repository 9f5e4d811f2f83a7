//! Configuration types
//!
//! The TOML layout mirrors the deployment: one `[client]` table for
//! client-wide knobs and one `[[catalog]]` / `[[order]]` array entry per
//! replica, listed in failover-scan order.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::EndpointUrl;

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Client-wide settings
    #[serde(default)]
    pub client: ClientConfig,
    /// Catalog replicas, tried in the order listed
    #[serde(default = "super::defaults::default_catalog_replicas")]
    pub catalog: Vec<ReplicaConfig>,
    /// Order replicas, tried in the order listed
    #[serde(default = "super::defaults::default_order_replicas")]
    pub order: Vec<ReplicaConfig>,
}

impl Config {
    /// Catalog endpoint URLs in configured order
    #[must_use]
    pub fn catalog_endpoints(&self) -> Vec<EndpointUrl> {
        self.catalog.iter().map(|r| r.url.clone()).collect()
    }

    /// Order endpoint URLs in configured order
    #[must_use]
    pub fn order_endpoints(&self) -> Vec<EndpointUrl> {
        self.order.iter().map(|r| r.url.clone()).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            catalog: super::defaults::default_catalog_replicas(),
            order: super::defaults::default_order_replicas(),
        }
    }
}

/// Client-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Per-request timeout in seconds
    ///
    /// None disables the timeout (default); a hung replica then blocks
    /// the prompt until the request resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Request timeout as a `Duration`, when configured
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for a single service replica
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplicaConfig {
    pub url: EndpointUrl,
}
