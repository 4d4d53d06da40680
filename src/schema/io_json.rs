//! JSON reading and writing for schema documents.
//!
//! The on-disk form is a compact JSON array:
//!
//! ```text
//! [{"name":"a.png","data":"hello"},{"name":"b.png","data":""}]
//! ```
//!
//! Parsing is all-or-nothing. A document whose top level is not an array,
//! or with any element that is not an object carrying string `name` and
//! `data` fields, is rejected as a whole. Extra keys on an element are
//! ignored.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_json::Value;

use super::model::SchemaDocument;
use crate::error::QrSchemaError;

/// Reads a schema document from a JSON file.
///
/// # Errors
/// Returns `UnreadableInput` if the file cannot be read and
/// `MalformedDocument` if its contents are not a valid schema document.
pub fn read_schema_json(path: &Path) -> Result<SchemaDocument, QrSchemaError> {
    let bytes = fs::read(path).map_err(|source| QrSchemaError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;

    from_json_slice(&bytes).map_err(|source| QrSchemaError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a schema document to a JSON file, replacing any existing file.
///
/// The document is serialized in memory first so a serialization failure
/// never leaves a truncated file behind.
pub fn write_schema_json(path: &Path, document: &SchemaDocument) -> Result<(), QrSchemaError> {
    let json = to_json_string(document).map_err(|source| QrSchemaError::SchemaWrite {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(QrSchemaError::Io)
}

/// Parses a schema document from a JSON string.
pub fn from_json_str(json: &str) -> Result<SchemaDocument, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    document_from_value(value)
}

/// Parses a schema document from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<SchemaDocument, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    document_from_value(value)
}

/// Formats a schema document as compact JSON.
pub fn to_json_string(document: &SchemaDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(document)
}

fn document_from_value(value: Value) -> Result<SchemaDocument, serde_json::Error> {
    // serde's derived struct visitor also accepts `["name", "data"]`
    // sequences, which are not valid entries here.
    if let Some(items) = value.as_array() {
        if let Some(index) = items.iter().position(|item| !item.is_object()) {
            return Err(serde_json::Error::custom(format!(
                "entry at index {} is not an object",
                index
            )));
        }
    }

    serde_json::from_value(value)
}
