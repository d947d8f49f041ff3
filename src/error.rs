//! Naming errors

use namer_config::ConfigError;
use thiserror::Error;

/// Errors surfaced by a naming request.
///
/// `Clone` so a failed one-time resolution can be returned again on every
/// later request.
#[derive(Debug, Clone, Error)]
pub enum NamerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Package '{chain}' is not available. Set package.json#parcel-namer-rewrite:chain to set a delegate namer (\"@parcel/namer-default\" by default)")]
    DelegateNotFound { chain: String },

    #[error("Package '{chain}' has been found, but it's not a namer. Set package.json#parcel-namer-rewrite:chain to set a delegate namer (\"@parcel/namer-default\" by default)")]
    NotANamer { chain: String },

    #[error("failed to read asset {path}: {reason}")]
    AssetRead { path: String, reason: String },

    #[error("delegate namer failed: {0}")]
    Delegate(String),
}

impl NamerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NamerError::Config(_) => 1,
            NamerError::DelegateNotFound { .. } => 2,
            NamerError::NotANamer { .. } => 2,
            NamerError::AssetRead { .. } => 3,
            NamerError::Delegate(_) => 4,
        }
    }
}

/// Result type for naming operations
pub type NamerResult<T> = Result<T, NamerError>;
