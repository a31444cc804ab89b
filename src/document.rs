//! Document — JSON serialization of a [`TagMap`].
//!
//! The property document is a flat JSON object with one string field per
//! canonical tag key. The format is stable and consumed externally (the host
//! UI reads the cached artifact verbatim), so it must round-trip: parsing a
//! built document yields the map that produced it.

use std::io::BufRead;

use crate::error::Result;
use crate::scanner::scan_log;
use crate::types::TagMap;

/// Scan a log stream and serialize the resulting tags as a JSON object.
///
/// A log with no tag lines yields `{}`.
pub fn build_document<R: BufRead>(reader: R, prefix: &str) -> Result<String> {
    let tags = scan_log(reader, prefix)?;
    to_document(&tags)
}

/// Serialize an already-scanned [`TagMap`].
pub fn to_document(tags: &TagMap) -> Result<String> {
    Ok(serde_json::to_string(tags)?)
}

/// Parse a property document back into a [`TagMap`].
pub fn parse_document(document: &str) -> Result<TagMap> {
    Ok(serde_json::from_str(document)?)
}
