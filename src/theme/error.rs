//! Theme loading errors.

use std::path::PathBuf;

/// Error returned when a theme (or a config embedding one) cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported theme format `{0}`; expected .yaml, .yml or .json")]
    UnsupportedFormat(String),
}
