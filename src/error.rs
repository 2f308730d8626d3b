use std::path::PathBuf;

use thiserror::Error;

/// Disposable domain list error types
#[derive(Error, Debug)]
pub enum DomainListError {
    #[error("TLD table error at line {line}: {message}")]
    TldTable { line: usize, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to load '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<DomainListError>,
    },

    #[error("Failed to save '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: Box<DomainListError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomainListError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: impl Into<DomainListError>) -> Self {
        DomainListError::Load {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }

    pub(crate) fn save(path: impl Into<PathBuf>, source: impl Into<DomainListError>) -> Self {
        DomainListError::Save {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainListError>;
