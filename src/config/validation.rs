//! Configuration validation
//!
//! This module provides validation logic for the configuration to ensure
//! all settings are valid before a session starts.

use anyhow::Result;

use super::types::Config;

/// Timeouts above this are almost certainly a units mistake
const MAX_RECOMMENDED_TIMEOUT_SECS: u64 = 300;

impl Config {
    /// Validate configuration for correctness
    ///
    /// Replica URLs are already validated at construction (scheme, host).
    /// This checks the remaining semantic constraints:
    /// - At least one replica per service
    /// - Request timeout, when set, is non-zero
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(anyhow::anyhow!(
                "Configuration must have at least one catalog replica"
            ));
        }

        if self.order.is_empty() {
            return Err(anyhow::anyhow!(
                "Configuration must have at least one order replica"
            ));
        }

        if let Some(secs) = self.client.request_timeout_secs {
            if secs == 0 {
                return Err(anyhow::anyhow!(
                    "request_timeout_secs must be greater than zero when set \
                     (omit it to disable the timeout)"
                ));
            }
            if secs > MAX_RECOMMENDED_TIMEOUT_SECS {
                tracing::warn!(
                    "request_timeout_secs is set to {}s (> {}s). \
                     A hung replica will block the prompt for that long.",
                    secs,
                    MAX_RECOMMENDED_TIMEOUT_SECS
                );
            }
        }

        Ok(())
    }
}
