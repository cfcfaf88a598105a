//! Core record types for node location extraction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parallel field sequences collected from one walk of the document.
///
/// `coordinates` is flat and alternates latitude/longitude in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNodeFields {
    pub names: Vec<String>,
    pub areas: Vec<String>,
    pub types: Vec<String>,
    pub coordinates: Vec<f64>,
}

/// One pricing node row: node, latitude, longitude, area, type.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Filtered, name-sorted node records.
pub type CleanedDataset = Vec<NodeRecord>;

/// Counts reported after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub extracted: usize,
    pub retained: usize,
    pub dropped: usize,
}
