//! Configuration module
//!
//! This module handles all configuration types and loading
//! for the bookstore client.

mod defaults;
mod loading;
mod types;
mod validation;

// Re-export public types
pub use loading::{
    ConfigSource, create_default_config, has_replica_env_vars, load_config, load_config_from_env,
    load_config_with_fallback,
};
pub use types::{ClientConfig, Config, ReplicaConfig};

// Re-export default functions for use in tests and other modules
pub use defaults::{default_catalog_replicas, default_order_replicas};
