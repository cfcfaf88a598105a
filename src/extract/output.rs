//! Output serialization: the cleaned CSV and the node triples JSON.

use crate::error::ExtractError;
use crate::types::NodeRecord;
use std::path::Path;
use tracing::info;

/// Render records as CSV with a header row and no index column.
pub fn render_csv(records: &[NodeRecord]) -> Result<Vec<u8>, ExtractError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if records.is_empty() {
        writer.write_record(["node", "latitude", "longitude", "area", "type"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExtractError::Io(e.into_error()))
}

/// Write the CSV in one shot, replacing any existing file.
pub fn write_csv(path: &Path, records: &[NodeRecord]) -> Result<(), ExtractError> {
    let bytes = render_csv(records)?;
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), rows = records.len(), "Wrote node locations CSV");
    Ok(())
}

/// Render records as a JSON array of `[name, latitude, longitude]` triples.
pub fn render_triples(records: &[NodeRecord]) -> Result<String, ExtractError> {
    let triples: Vec<(&str, f64, f64)> = records
        .iter()
        .map(|r| (r.node.as_str(), r.latitude, r.longitude))
        .collect();
    Ok(serde_json::to_string_pretty(&triples)?)
}

/// Write the node triples JSON, replacing any existing file.
pub fn write_triples(path: &Path, records: &[NodeRecord]) -> Result<(), ExtractError> {
    let json = render_triples(records)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), nodes = records.len(), "Wrote node triples JSON");
    Ok(())
}
