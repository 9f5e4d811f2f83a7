//! Core types used throughout the client

pub mod endpoint;
pub mod validated;

pub use endpoint::EndpointUrl;
pub use validated::{ItemNumber, Topic, ValidationError};

use uuid::Uuid;

/// Unique identifier for an interactive session
///
/// One process runs one session; the id ties every log line of a run
/// together, the same way request ids do on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a new unique session ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Shortened form for log readability
    #[must_use]
    pub fn short(&self) -> String {
        crate::formatting::short_id(&self.0)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
