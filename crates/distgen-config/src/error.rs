//! Error types for configuration synthesis.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Registry lookup errors
    #[error("unknown build target '{name}' (registered targets: {known})")]
    UnknownTarget { name: String, known: String },

    // Banner synthesis errors
    #[error("package manifest declares no version and no fallback version is set")]
    MissingVersion,

    // Manifest parsing/loading errors
    #[error("invalid package manifest: {0}")]
    InvalidManifest(String),

    // Schema validation errors (no filesystem checks)
    #[error("invalid bundle config: {0}")]
    InvalidConfig(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
