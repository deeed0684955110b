//! Error type shared by the pure model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller passed a value outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("asset `{category}/{name}` is missing")]
    MissingAsset { category: String, name: String },

    #[error("asset category `{0}` is missing or empty")]
    EmptyCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        CoreError::InvalidConfig(message.into())
    }
}
