//! JSON serialization for annotation sets.
//!
//! This is the CLI's exchange format: one JSON document per image holding
//! the image dimensions and the shapes drawn on it. Useful for:
//! - Feeding graded submissions through the CLI
//! - Debugging reconciliation results against known inputs
//! - Exchanging annotation sets between annograde instances

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::model::AnnotationSet;
use crate::error::AnnogradeError;

/// Reads an annotation set from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_set_json(path: &Path) -> Result<AnnotationSet, AnnogradeError> {
    let file = File::open(path).map_err(AnnogradeError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| AnnogradeError::SetJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes an annotation set to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_set_json(path: &Path, set: &AnnotationSet) -> Result<(), AnnogradeError> {
    let file = File::create(path).map_err(AnnogradeError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, set).map_err(|source| AnnogradeError::SetJsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads an annotation set from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<AnnotationSet, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads an annotation set from a JSON byte slice.
pub fn from_json_slice(json: &[u8]) -> Result<AnnotationSet, serde_json::Error> {
    serde_json::from_slice(json)
}

/// Writes an annotation set to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_json_string(set: &AnnotationSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(set)
}
