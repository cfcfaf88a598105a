//! Node Location Extraction
//!
//! Linear pipeline over the CAISO price contour map:
//! check input, parse, collect fields, assemble records, sort, filter, write.

pub mod assemble;
pub mod document;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod source;

pub use filter::FilterBounds;
pub use pipeline::{extract_node_locations, NodeLocationExtractor, RunOptions};
