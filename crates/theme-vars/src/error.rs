//! Error types for loading theme configs and emitting CSS.
//!
//! Resolving colors never fails; these errors only come from the edges.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or writing output.
#[derive(Debug, Error)]
pub enum ThemeVarsError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML config failed to deserialize.
    #[error("invalid YAML theme config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON config failed to deserialize.
    #[error("invalid JSON theme config: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file extension is not one of `yaml`, `yml` or `json`.
    #[error("unsupported config format for {}: expected .yaml, .yml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A color format selector other than `rgb` or `hsl`.
    #[error("invalid color format '{0}': expected 'rgb' or 'hsl'")]
    InvalidColorFormat(String),

    /// Writing CSS output failed.
    #[error("failed to write CSS: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Result type for theme-vars operations.
pub type Result<T> = std::result::Result<T, ThemeVarsError>;
