//! Error taxonomy for the shim

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShimError {
    /// No storage backend is reachable (e.g. LocalStorage disabled)
    #[error("persistent storage is unavailable")]
    StorageUnavailable,

    #[error("storage {op} failed for key `{key}`: {message}")]
    Storage {
        op: &'static str,
        key: String,
        message: String,
    },

    #[error("failed to encode application state")]
    Encode(#[source] serde_json::Error),

    #[error("application state is malformed")]
    Decode(#[source] serde_json::Error),

    #[error("mount point `#{0}` not found")]
    MountPointMissing(String),

    #[error("embedding `{module}` failed: {message}")]
    Embed { module: String, message: String },

    #[error("invalid boot configuration")]
    Config(#[source] serde_json::Error),
}

impl ShimError {
    pub fn storage(op: &'static str, key: &str, message: impl Into<String>) -> Self {
        ShimError::Storage {
            op,
            key: key.to_string(),
            message: message.into(),
        }
    }
}
