use std::path::PathBuf;
use thiserror::Error;

use crate::symbol::SymbolError;

/// The main error type for qrschema operations.
#[derive(Debug, Error)]
pub enum QrSchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to scan image {path}: {source}")]
    SymbolDecode {
        path: PathBuf,
        #[source]
        source: SymbolError,
    },

    #[error("Malformed schema document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write schema document to {path}: {source}")]
    SchemaWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode entry '{name}': {source}")]
    EncodeFailure {
        name: String,
        #[source]
        source: SymbolError,
    },

    #[error("Entry name '{name}' is not a plain file name")]
    InvalidEntryName { name: String },

    #[error("Failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
