//! Error payloads carried by failed outcomes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The open error value attached to a failed [`Outcome`](crate::Outcome).
///
/// A payload is a human-readable message plus an open map of machine-readable
/// details. The default payload (empty message, no details) doubles as the
/// sentinel returned by [`Outcome::error`](crate::Outcome::error) on success
/// instances: callers must not use emptiness to distinguish "no error" from
/// "an error that happens to be empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorPayload {
    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,

    /// Additional structured details, flattened into the payload object.
    #[serde(flatten)]
    details: serde_json::Map<String, Value>,
}

impl ErrorPayload {
    /// Creates a payload with the given message and no details.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: serde_json::Map::new(),
        }
    }

    /// Adds a structured detail to the payload.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a structured detail by key.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// Returns all structured details.
    #[must_use]
    pub fn details(&self) -> &serde_json::Map<String, Value> {
        &self.details
    }

    /// Returns true if the payload carries neither a message nor details.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.details.is_empty()
    }
}

impl From<&str> for ErrorPayload {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorPayload {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<anyhow::Error> for ErrorPayload {
    fn from(error: anyhow::Error) -> Self {
        Self::new(error.to_string())
    }
}
