//! Error types for Weave.
//!
//! Sub-enums per concern, folded into [`WeaveError`] via `#[from]`.

mod config_error;
mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error for every fallible Weave operation.
#[derive(Debug, thiserror::Error)]
pub enum WeaveError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type WeaveResult<T> = Result<T, WeaveError>;
