//! XML document walk.
//!
//! The price contour map carries node fields in two namespaces: the CAISO
//! mobile app namespace holds name (`n`), area (`a`) and type (`p`), while
//! coordinates are serialized as a flat array of `decimal` elements.

use crate::error::ExtractError;
use crate::types::RawNodeFields;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// CAISO mobile app namespace.
pub const CAISO_NS: &str = "urn:schemas.caiso.com/mobileapp/2014/03";

/// Generic serialized array namespace holding the coordinate decimals.
pub const ARRAYS_NS: &str = "http://schemas.microsoft.com/2003/10/Serialization/Arrays";

/// Which field a matching element feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldTag {
    Name,
    Area,
    Type,
    Coordinate,
}

fn classify(node: &Node) -> Option<FieldTag> {
    if !node.is_element() {
        return None;
    }
    let tag = node.tag_name();
    match (tag.namespace(), tag.name()) {
        (Some(CAISO_NS), "n") => Some(FieldTag::Name),
        (Some(CAISO_NS), "a") => Some(FieldTag::Area),
        (Some(CAISO_NS), "p") => Some(FieldTag::Type),
        (Some(ARRAYS_NS), "decimal") => Some(FieldTag::Coordinate),
        _ => None,
    }
}

/// Parse `xml` and collect the four field sequences in document order.
pub fn extract_fields(xml: &str) -> Result<RawNodeFields, ExtractError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let fields = collect_fields(&doc)?;
    debug!(
        names = fields.names.len(),
        areas = fields.areas.len(),
        types = fields.types.len(),
        coordinates = fields.coordinates.len(),
        "Collected raw node fields"
    );
    Ok(fields)
}

fn collect_fields(doc: &Document) -> Result<RawNodeFields, ExtractError> {
    let mut fields = RawNodeFields::default();

    for node in doc.descendants() {
        let Some(tag) = classify(&node) else {
            continue;
        };
        let text = node.text().unwrap_or("");
        match tag {
            FieldTag::Name => fields.names.push(text.to_string()),
            FieldTag::Area => fields.areas.push(text.to_string()),
            FieldTag::Type => fields.types.push(text.to_string()),
            FieldTag::Coordinate => {
                let value = text.trim().parse::<f64>().map_err(|_| {
                    ExtractError::InvalidCoordinate {
                        index: fields.coordinates.len(),
                        text: text.to_string(),
                    }
                })?;
                fields.coordinates.push(value);
            }
        }
    }

    Ok(fields)
}
