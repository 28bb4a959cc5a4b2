/// Error types for startup and catalog loading
///
/// Everything here is fatal: the browser refuses to open with a
/// missing or malformed catalog or configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the catalog dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset has no books to browse
    #[error("source required: catalog contains no books")]
    Empty,

    #[error("duplicate book id in catalog: {0}")]
    DuplicateId(String),
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `pagination.range` must be `[0, page_size]` with a positive page size
    #[error("range must be an array with two numbers [0, page_size > 0] (got [{start}, {end}])")]
    InvalidRange { start: usize, end: usize },
}

/// Top-level error returned from `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}
