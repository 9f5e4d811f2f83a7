//! Validated domain types that enforce invariants at construction time

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// Validation errors for domain types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("topic cannot be empty or whitespace")]
    EmptyTopic,

    #[error("item number must be a positive integer: {0}")]
    InvalidItemNumber(String),

    #[error("invalid replica URL: {0}")]
    InvalidEndpointUrl(String),

    #[error("replica URL must use http or https: {0}")]
    UnsupportedScheme(String),

    #[error("replica URL is missing a host: {0}")]
    MissingHost(String),
}

/// Macro to generate validated string newtypes.
///
/// Each generated type gets:
/// - A `new()` constructor that validates
/// - `as_str()` getter
/// - `AsRef<str>`, `Deref`, `Display`, `TryFrom<String>` impls
/// - Serde `Serialize` and `Deserialize` with validation
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            validation: |$s_param:ident| $validation:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new($s_param: String) -> Result<Self, ValidationError> {
                let validate = || $validation;
                validate()?;
                Ok(Self($s_param))
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from($s_param: String) -> Result<Self, Self::Error> {
                Self::new($s_param)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

validated_string! {
    /// A catalog topic used for search requests and `search:` cache keys
    ///
    /// Topics may contain spaces ("distributed systems"); they are
    /// percent-encoded when a request URL is built, never here. Only
    /// empty or whitespace-only topics are rejected.
    ///
    /// # Examples
    /// ```
    /// use bazar_client::types::Topic;
    ///
    /// let topic = Topic::new("graduate school".to_string()).unwrap();
    /// assert_eq!(topic.as_str(), "graduate school");
    ///
    /// assert!(Topic::new("".to_string()).is_err());
    /// assert!(Topic::new("   ".to_string()).is_err());
    /// ```
    pub struct Topic(String) {
        validation: |s| {
            if s.trim().is_empty() {
                Err(ValidationError::EmptyTopic)
            } else {
                Ok(())
            }
        },
    }
}

/// A catalog item number, always positive
///
/// Item numbers come from user input as raw strings; `FromStr` performs
/// the full parse-and-validate step, so `"0"`, `"-3"` and `"abc"` are all
/// rejected with the same error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemNumber(NonZeroU32);

impl ItemNumber {
    /// Create an item number from an already non-zero value
    #[must_use]
    #[inline]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Create an item number, rejecting zero
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidItemNumber(value.to_string()))
    }

    /// Get the underlying value
    #[must_use]
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }
}

impl FromStr for ItemNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidItemNumber(s.to_string()))?;
        Self::try_new(value)
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ItemNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

impl<'de> Deserialize<'de> for ItemNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}
