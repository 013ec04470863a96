use std::path::PathBuf;
use thiserror::Error;

use crate::field::FieldKindTag;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A field table needs at least one field")]
    NoFields,
    #[error("Field {header:?} of type {kind} has no source key; only custom fields may read the whole row")]
    MissingSourceKey { header: String, kind: FieldKindTag },
    #[error("The unique id key must not be empty")]
    EmptyUniqueId,
    #[error("Row data must be a JSON array")]
    RowsNotArray,
    #[error("Row {index} is not a JSON object")]
    RowNotObject { index: usize },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn missing_source_key(header: impl Into<String>, kind: FieldKindTag) -> Self {
        Self::MissingSourceKey {
            header: header.into(),
            kind,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
