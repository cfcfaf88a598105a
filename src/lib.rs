//! Nodeloc: CAISO pricing node locations
//!
//! Extracts node names, coordinates, areas and types from the CAISO price
//! contour map XML, drops records with implausible coordinates and writes a
//! cleaned, name-sorted CSV.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod tooling;
pub mod types;

pub use error::ExtractError;
pub use extract::{extract_node_locations, NodeLocationExtractor, RunOptions};
pub use types::{CleanedDataset, ExtractionSummary, NodeRecord, RawNodeFields};
