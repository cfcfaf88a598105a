//! Coordinate sanity filter.

use crate::types::{CleanedDataset, NodeRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_min_longitude() -> f64 {
    -180.0
}

fn default_max_longitude() -> f64 {
    0.0
}

fn default_min_latitude() -> f64 {
    20.0
}

/// Open coordinate window a record must fall in to be kept.
///
/// All bounds are exclusive, so a node sitting exactly on a bound is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBounds {
    #[serde(default = "default_min_longitude")]
    pub min_longitude: f64,

    #[serde(default = "default_max_longitude")]
    pub max_longitude: f64,

    #[serde(default = "default_min_latitude")]
    pub min_latitude: f64,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            min_longitude: default_min_longitude(),
            max_longitude: default_max_longitude(),
            min_latitude: default_min_latitude(),
        }
    }
}

impl FilterBounds {
    /// NaN coordinates never pass.
    pub fn accepts(&self, record: &NodeRecord) -> bool {
        record.longitude > self.min_longitude
            && record.longitude < self.max_longitude
            && record.latitude > self.min_latitude
    }

    /// Keep accepted records, preserving their order.
    pub fn apply(&self, records: Vec<NodeRecord>) -> CleanedDataset {
        let before = records.len();
        let kept: CleanedDataset = records.into_iter().filter(|r| self.accepts(r)).collect();
        debug!(
            kept = kept.len(),
            dropped = before - kept.len(),
            "Applied coordinate filter"
        );
        kept
    }
}
