//! Error types
//!
//! Constraint violations are never errors: wrappers clamp, truncate, collapse
//! or revert silently. The variants here cover the two places a caller can
//! still get a failure back, building a regex matcher from a bad pattern and
//! persisting a value that does not serialize.

use thiserror::Error;

/// Errors raised while building wrappers or persisting values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WrappedError {
    /// The pattern handed to a regex wrapper did not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A value could not be converted to its stored JSON form.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        /// Store key the value was written under.
        key: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl WrappedError {
    /// Creates a serialization error for `key`.
    pub fn serialize(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialize {
            key: key.into(),
            source,
        }
    }
}

/// Result alias for fallible wrapper operations.
pub type Result<T, E = WrappedError> = std::result::Result<T, E>;
