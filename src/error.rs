//! Client error types
//!
//! This module provides the error taxonomy for catalog and order requests,
//! keeping "nobody has it" separate from "a replica is broken" so callers
//! can react differently to each.

use std::fmt;

use crate::types::{EndpointUrl, ValidationError};

/// Errors that can occur while serving a session command
#[derive(Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// Every catalog replica answered 404 for this request
    NotFoundOnAllReplicas { request: String, replicas_tried: usize },

    /// Network-level failure before any HTTP status arrived
    Transport {
        endpoint: EndpointUrl,
        source: reqwest::Error,
    },

    /// A replica answered with an explicit error status (or a 2xx body
    /// that could not be decoded)
    Service {
        endpoint: EndpointUrl,
        status: reqwest::StatusCode,
        detail: String,
    },

    /// User input failed validation before any cache or network activity
    InvalidInput { detail: String },

    /// A replica pool was constructed from an empty address list
    NoReplicas { service: &'static str },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFoundOnAllReplicas {
                request,
                replicas_tried,
            } => {
                write!(
                    f,
                    "Not found on any replica: {} ({} tried)",
                    request, replicas_tried
                )
            }
            Self::Transport { endpoint, source } => {
                write!(f, "Transport failure talking to {}: {}", endpoint, source)
            }
            Self::Service {
                endpoint,
                status,
                detail,
            } => {
                if detail.is_empty() {
                    write!(f, "Replica {} answered {}", endpoint, status)
                } else {
                    write!(f, "Replica {} answered {}: {}", endpoint, status, detail)
                }
            }
            Self::InvalidInput { detail } => write!(f, "Invalid input: {}", detail),
            Self::NoReplicas { service } => {
                write!(f, "No replicas configured for {} service", service)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ClientError {
    /// Check if this is the "exhausted every replica" outcome
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundOnAllReplicas { .. })
    }

    /// Check if this is a network-level failure
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this came from rejecting user input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if retrying the same request could help
    ///
    /// Always `false`: catalog reads already scanned every replica, and
    /// purchases must never be re-sent.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        false
    }

    /// Get the appropriate log level for this error
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        match self {
            // A topic or item simply not existing is a normal outcome
            Self::NotFoundOnAllReplicas { .. } => tracing::Level::INFO,
            // Typos at the prompt are expected
            Self::InvalidInput { .. } => tracing::Level::DEBUG,
            // Network errors might be transient
            Self::Transport { .. } => tracing::Level::WARN,
            // A replica explicitly failing needs attention
            Self::Service { .. } => tracing::Level::ERROR,
            Self::NoReplicas { .. } => tracing::Level::ERROR,
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput {
            detail: err.to_string(),
        }
    }
}
