//! Default values for configuration fields
//!
//! This module centralizes the default replica topology used when a config
//! file omits a replica list or no config file is present at all.

use super::types::ReplicaConfig;
use crate::types::EndpointUrl;

/// Default catalog replica set (the standard compose topology)
#[inline]
pub fn default_catalog_replicas() -> Vec<ReplicaConfig> {
    vec![
        ReplicaConfig {
            url: EndpointUrl::parse("http://catalog-service-1:3001")
                .expect("default catalog URL is valid"),
        },
        ReplicaConfig {
            url: EndpointUrl::parse("http://catalog-service-2:3002")
                .expect("default catalog URL is valid"),
        },
    ]
}

/// Default order replica set (the standard compose topology)
#[inline]
pub fn default_order_replicas() -> Vec<ReplicaConfig> {
    vec![
        ReplicaConfig {
            url: EndpointUrl::parse("http://order-service-1:3003")
                .expect("default order URL is valid"),
        },
        ReplicaConfig {
            url: EndpointUrl::parse("http://order-service-2:3004")
                .expect("default order URL is valid"),
        },
    ]
}
