//! Replica base address type backed by a parsed URL

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use super::validated::ValidationError;

/// Base address of a catalog or order replica
///
/// Always an absolute http/https URL with a host and no query or
/// fragment. Request URLs are built with [`EndpointUrl::join_segments`],
/// which percent-encodes each path segment, so topics with spaces (or
/// worse) never produce a malformed request line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Parse and validate a replica base address
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(input.trim())
            .map_err(|e| ValidationError::InvalidEndpointUrl(format!("{input}: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(ValidationError::UnsupportedScheme(input.trim().to_string())),
        }

        if url.host_str().is_none() {
            return Err(ValidationError::MissingHost(input.trim().to_string()));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ValidationError::InvalidEndpointUrl(format!(
                "{input}: query and fragment are not allowed in a replica base address"
            )));
        }

        Ok(Self(url))
    }

    /// Build a request URL by appending percent-encoded path segments
    #[must_use]
    pub fn join_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // http/https URLs always have a segmentable path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Get the full URL string as parsed
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the underlying URL
    #[must_use]
    #[inline]
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A bare base like "http://host:3001" parses with path "/";
        // render it without the slash the way it was configured.
        if self.0.path() == "/" {
            write!(f, "{}", self.0.as_str().trim_end_matches('/'))
        } else {
            write!(f, "{}", self.0.as_str())
        }
    }
}

impl FromStr for EndpointUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EndpointUrl {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Serialize for EndpointUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EndpointUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
