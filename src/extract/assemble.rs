//! Record assembly from parallel field sequences.

use crate::error::ExtractError;
use crate::types::{NodeRecord, RawNodeFields};
use tracing::{debug, warn};

/// Split a flat coordinate list into (latitudes, longitudes) by index parity.
pub fn deinterleave(coordinates: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let latitudes = coordinates.iter().step_by(2).copied().collect();
    let longitudes = coordinates.iter().skip(1).step_by(2).copied().collect();
    (latitudes, longitudes)
}

/// Below this many pairs suspicious latitudes are only logged.
pub const MIN_PAIRS_FOR_ORDER_CHECK: usize = 8;

fn looks_transposed(latitude: f64, longitude: f64) -> bool {
    latitude.abs() > 90.0 && longitude.abs() <= 90.0
}

/// Reject coordinate lists whose pairs are mostly (lon, lat) instead of (lat, lon).
///
/// Fails only when more than half of at least `MIN_PAIRS_FOR_ORDER_CHECK`
/// pairs look transposed. Anything less is logged and left to the filter.
pub fn check_coordinate_order(latitudes: &[f64], longitudes: &[f64]) -> Result<(), ExtractError> {
    let pairs = latitudes.len().min(longitudes.len());
    let suspicious = latitudes
        .iter()
        .zip(longitudes)
        .filter(|(lat, lon)| looks_transposed(**lat, **lon))
        .count();

    if suspicious == 0 {
        return Ok(());
    }
    if pairs >= MIN_PAIRS_FOR_ORDER_CHECK && suspicious * 2 > pairs {
        return Err(ExtractError::TransposedCoordinates { suspicious, pairs });
    }
    warn!(suspicious, pairs, "Some coordinate pairs have implausible latitudes");
    Ok(())
}

/// Build one record per node index.
///
/// Fails with `FieldLengthMismatch` unless every sequence describes the same
/// number of nodes.
pub fn assemble(fields: RawNodeFields) -> Result<Vec<NodeRecord>, ExtractError> {
    let RawNodeFields {
        names,
        areas,
        types,
        coordinates,
    } = fields;

    let count = names.len();
    if areas.len() != count
        || types.len() != count
        || coordinates.len() % 2 != 0
        || coordinates.len() / 2 != count
    {
        return Err(ExtractError::FieldLengthMismatch {
            names: names.len(),
            areas: areas.len(),
            types: types.len(),
            coordinates: coordinates.len(),
        });
    }

    let (latitudes, longitudes) = deinterleave(&coordinates);
    check_coordinate_order(&latitudes, &longitudes)?;

    let records: Vec<NodeRecord> = names
        .into_iter()
        .zip(areas)
        .zip(types)
        .zip(latitudes.into_iter().zip(longitudes))
        .map(|(((node, area), node_type), (latitude, longitude))| NodeRecord {
            node,
            latitude,
            longitude,
            area,
            node_type,
        })
        .collect();

    debug!(records = records.len(), "Assembled node records");
    Ok(records)
}

/// Stable sort by node name in codepoint order.
pub fn sort_by_node(records: &mut [NodeRecord]) {
    records.sort_by(|a, b| a.node.cmp(&b.node));
}
