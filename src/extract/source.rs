//! Input acquisition: the source document is fetched by hand.

use crate::error::ExtractError;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;
use tracing::{debug, warn};

/// Default input document name, relative to the workspace.
pub const INPUT_FILE: &str = "GetPriceContourMap.xml";

/// Default output file name, relative to the workspace.
pub const OUTPUT_FILE: &str = "caiso-node-latlon.csv";

/// Where the input document has to be downloaded from.
pub const SOURCE_URL: &str =
    "http://wwwmobile.caiso.com/Web.Service.Chart/api/v1/ChartService/GetPriceContourMap";

/// Fail with `MissingInput` unless the input document exists.
pub fn ensure_input(path: &Path, download_url: &str) -> Result<(), ExtractError> {
    if path.exists() {
        debug!(path = %path.display(), "Input document present");
        return Ok(());
    }
    warn!(
        path = %path.display(),
        url = download_url,
        "Input document missing, download it by hand"
    );
    Err(ExtractError::MissingInput {
        path: path.to_path_buf(),
        download_url: download_url.to_string(),
    })
}

/// Read the whole input document. The file handle is released on return.
pub fn read_input(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read input document");
    decode_document(&bytes)
}

/// Encoding label from the XML declaration, if the document starts with one.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let decl = &bytes[..end];
    let attr = decl.windows(8).position(|w| w == b"encoding")?;
    let rest = &decl[attr + 8..];
    let quote_at = rest.iter().position(|b| *b == b'"' || *b == b'\'')?;
    if !rest[..quote_at].iter().all(|b| *b == b'=' || b.is_ascii_whitespace()) {
        return None;
    }
    let quote = rest[quote_at];
    let value = &rest[quote_at + 1..];
    let close = value.iter().position(|b| *b == quote)?;
    Some(&value[..close])
}

/// Decode raw document bytes using the declared encoding (UTF-8 when undeclared).
///
/// A byte order mark takes precedence over the declaration.
pub fn decode_document(bytes: &[u8]) -> Result<String, ExtractError> {
    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label).ok_or_else(|| {
            ExtractError::MalformedInput(format!(
                "Unsupported document encoding: {}",
                String::from_utf8_lossy(label)
            ))
        })?,
        None => UTF_8,
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ExtractError::MalformedInput(format!(
            "Document is not valid {}",
            used.name()
        )));
    }
    debug!(encoding = used.name(), "Decoded input document");
    Ok(text.into_owned())
}

/// Instructions printed for the manual download step.
pub fn download_instructions(path: &Path, download_url: &str) -> String {
    format!(
        "Download the input file by hand from '{}' and save it at {}",
        download_url,
        path.display()
    )
}
