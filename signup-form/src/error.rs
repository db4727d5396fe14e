//! Error types for session setup and lifecycle.
//!
//! User input failures are never errors; they are reported as messages on
//! the field that produced them.

use thiserror::Error;

/// Errors raised while building or driving a form session.
#[derive(Debug, Error)]
pub enum FormError {
    /// A rule or master pattern failed to compile.
    #[error("rule '{key}' has an invalid pattern: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },

    /// Two rules in the same battery share a key.
    #[error("duplicate rule key '{0}'")]
    DuplicateRule(String),

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The session was torn down and no longer accepts events.
    #[error("form session has been torn down")]
    TornDown,
}

impl FormError {
    /// Creates an invalid pattern error for the given rule key.
    pub fn invalid_pattern(key: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            key: key.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FormError>;
