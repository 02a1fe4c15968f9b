//! Error types for metadata derivation.

use thiserror::Error;

/// Errors raised while reading a model's schema.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing database could not be reached.
    ///
    /// The decorator recovers from this locally by degrading to an empty
    /// field map, so callers of the view accessors never observe it.
    #[error("schema for `{model}` is unavailable: {reason}")]
    SchemaUnavailable { model: String, reason: String },

    /// A column or association descriptor is missing required attributes.
    #[error("malformed schema descriptor on `{model}`: {detail}")]
    MalformedDescriptor { model: String, detail: String },

    /// Serializing a field listing failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Build a `SchemaUnavailable` error.
    pub fn unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::SchemaUnavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Build a `MalformedDescriptor` error.
    pub fn malformed(model: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::MalformedDescriptor {
            model: model.into(),
            detail: detail.into(),
        }
    }

    /// True if this error means the database could not be reached.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Error::SchemaUnavailable { .. })
    }
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
