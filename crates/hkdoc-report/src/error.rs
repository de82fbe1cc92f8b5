//! Report error types.

use std::path::PathBuf;

use hkdoc_model::Category;
use thiserror::Error;

/// A supported entry lacks data a table column needs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("{category} type {identifier} has no codings in the mapping")]
    MissingCoding {
        category: Category,
        identifier: String,
    },

    #[error("{category} type {identifier} has no unit in the mapping")]
    MissingUnit {
        category: Category,
        identifier: String,
    },
}

/// A document could not be published.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot replace {path}: it exists and is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("failed to move {temp_path} onto {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
