//! Error types for the node location extractor.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting node locations.
///
/// Every variant is fatal: the pipeline aborts before the output file is
/// touched.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input document has not been downloaded yet.
    #[error(
        "Input file not found: {}. Download it by hand from '{download_url}' and save it there",
        .path.display()
    )]
    MissingInput { path: PathBuf, download_url: String },

    #[error("Malformed input XML: {0}")]
    MalformedInput(String),

    #[error("Invalid coordinate at position {index}: {text:?}")]
    InvalidCoordinate { index: usize, text: String },

    #[error(
        "Field length mismatch: {names} names, {areas} areas, {types} types, {coordinates} coordinates"
    )]
    FieldLengthMismatch {
        names: usize,
        areas: usize,
        types: usize,
        coordinates: usize,
    },

    #[error("Coordinates look transposed: {suspicious} of {pairs} pairs have latitude outside [-90, 90]")]
    TransposedCoordinates { suspicious: usize, pairs: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<roxmltree::Error> for ExtractError {
    fn from(err: roxmltree::Error) -> Self {
        ExtractError::MalformedInput(err.to_string())
    }
}

impl From<config::ConfigError> for ExtractError {
    fn from(err: config::ConfigError) -> Self {
        ExtractError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ExtractError {
    fn from(err: toml::ser::Error) -> Self {
        ExtractError::Serialization(err.to_string())
    }
}
