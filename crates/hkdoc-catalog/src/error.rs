#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping file {path} has no `{section}` section")]
    MissingSection { path: PathBuf, section: String },

    #[error("mapping file {path}: section `{section}` is not an object keyed by identifier: {source}")]
    InvalidSection {
        path: PathBuf,
        section: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping file {path}: section `{section}` entry `{identifier}` is invalid: {source}")]
    InvalidEntry {
        path: PathBuf,
        section: String,
        identifier: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
