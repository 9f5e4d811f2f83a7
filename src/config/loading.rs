//! Configuration loading from files and environment variables
//!
//! This module handles loading configuration from TOML files and environment
//! variables, with environment variables taking precedence for Docker/container
//! deployments.

use anyhow::Result;

use super::types::{Config, ReplicaConfig};

/// Load one replica list from indexed environment variables
///
/// Supports indexed environment variables for Docker/container deployments:
/// - `BAZAR_CATALOG_0_URL`, `BAZAR_CATALOG_1_URL`, etc.
/// - `BAZAR_ORDER_0_URL`, `BAZAR_ORDER_1_URL`, etc.
///
/// Indexing stops at the first gap. A present but malformed URL is an
/// error rather than a silent skip.
fn load_replicas_from_env(service: &str) -> Result<Option<Vec<ReplicaConfig>>> {
    let mut replicas = Vec::new();
    let mut index = 0;

    loop {
        let url_key = format!("BAZAR_{}_{}_URL", service, index);
        let raw = match std::env::var(&url_key) {
            Ok(value) => value,
            Err(_) => {
                // No more replicas found
                break;
            }
        };

        let url = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid URL in {}: {}", url_key, e))?;
        replicas.push(ReplicaConfig { url });

        index += 1;
    }

    if replicas.is_empty() {
        Ok(None)
    } else {
        Ok(Some(replicas))
    }
}

/// Apply environment variable overrides to a loaded configuration
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(catalog) = load_replicas_from_env("CATALOG")? {
        tracing::info!(
            "Using {} catalog replica(s) from environment variables",
            catalog.len()
        );
        config.catalog = catalog;
    }

    if let Some(order) = load_replicas_from_env("ORDER")? {
        tracing::info!(
            "Using {} order replica(s) from environment variables",
            order.len()
        );
        config.order = order;
    }

    if let Ok(raw) = std::env::var("BAZAR_REQUEST_TIMEOUT_SECS") {
        let secs = raw.parse::<u64>().map_err(|e| {
            anyhow::anyhow!("Invalid BAZAR_REQUEST_TIMEOUT_SECS '{}': {}", raw, e)
        })?;
        config.client.request_timeout_secs = Some(secs);
    }

    Ok(())
}

/// Check whether any replica environment variables are set
#[must_use]
pub fn has_replica_env_vars() -> bool {
    std::env::var("BAZAR_CATALOG_0_URL").is_ok() || std::env::var("BAZAR_ORDER_0_URL").is_ok()
}

/// Load configuration from a TOML file, with environment variable overrides
///
/// Environment variables for replicas take precedence over the config file:
/// - `BAZAR_CATALOG_0_URL`, `BAZAR_CATALOG_1_URL`, ...
/// - `BAZAR_ORDER_0_URL`, `BAZAR_ORDER_1_URL`, ...
///
/// This allows Docker/container deployments to override replicas without
/// modifying the config file.
pub fn load_config(config_path: &str) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", config_path, e))?;

    let mut config: Config = toml::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", config_path, e))?;

    apply_env_overrides(&mut config)?;

    // Validate the loaded configuration
    config.validate()?;

    Ok(config)
}

/// Build a configuration from environment variables alone
///
/// Replica lists not covered by environment variables fall back to the
/// built-in compose topology.
pub fn load_config_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML file on disk
    File(String),
    /// Indexed environment variables
    Environment,
    /// The built-in compose topology
    BuiltinDefaults,
}

impl ConfigSource {
    /// Human-readable description for startup logging
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::File(path) => format!("config file '{}'", path),
            Self::Environment => "environment variables".to_string(),
            Self::BuiltinDefaults => "built-in defaults".to_string(),
        }
    }
}

/// Load configuration from the first available source
///
/// Precedence: the config file if it exists, then replica environment
/// variables, then the built-in compose topology. A file that exists but
/// fails to parse is an error, not a fallback.
pub fn load_config_with_fallback(config_path: &str) -> Result<(Config, ConfigSource)> {
    if std::path::Path::new(config_path).exists() {
        let config = load_config(config_path)?;
        return Ok((config, ConfigSource::File(config_path.to_string())));
    }

    if has_replica_env_vars() {
        let config = load_config_from_env()?;
        return Ok((config, ConfigSource::Environment));
    }

    let config = create_default_config();
    config.validate()?;
    Ok((config, ConfigSource::BuiltinDefaults))
}

/// Create a default configuration for examples/testing
#[must_use]
pub fn create_default_config() -> Config {
    Config::default()
}
