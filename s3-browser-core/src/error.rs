//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use s3_browser_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The current page has no child with this name
    #[error("No entry named '{name}' under '{address}'")]
    ChildNotFound { address: String, name: String },

    /// The address cannot be resolved at all (wrong scheme, empty bucket, etc.)
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A fetched document could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ChildNotFound { .. } | Self::InvalidAddress(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
