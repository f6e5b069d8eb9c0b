// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegroupError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed regroup.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RegroupError>;

// Allow `?` on std::io::Error by converting to RegroupError::Io with unknown path.
impl From<std::io::Error> for RegroupError {
    fn from(source: std::io::Error) -> Self {
        RegroupError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
