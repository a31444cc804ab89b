//! Scanner — streaming extraction of tag lines from a job log.
//!
//! A tag line is a log line that *starts* with the recognition prefix,
//! followed by a raw key, a `:`, and the value up to the line terminator:
//!
//! ```text
//! X-Legion-Model-Id:income-classifier
//! ```
//!
//! The column-0 anchoring is load-bearing: a commented-out occurrence
//! (`//X-Legion-Model-Id:...`) no longer starts the line and is ignored,
//! which is how notebook authors disable a tag without deleting it.

use std::io::BufRead;

use crate::error::Result;
use crate::normalizer::normalize_key;
use crate::types::TagMap;

/// Scan a log stream for tag lines anchored by `prefix`.
///
/// The reader is consumed; logs may be large, so input is processed one line
/// at a time and only the resulting map is held in memory. `\n`, `\r\n`, and
/// bare `\r` all terminate a line; terminators never appear in values. Bytes
/// are decoded lossily as UTF-8.
///
/// Per canonical key the last occurrence in the stream wins. Lines that do
/// not start with the prefix, and prefix lines without a `:`, are skipped.
/// Only an I/O failure of the underlying stream aborts the scan.
pub fn scan_log<R: BufRead>(mut reader: R, prefix: &str) -> Result<TagMap> {
    let mut tags = TagMap::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let chunk = String::from_utf8_lossy(&buf);
        // `read_until` splits on `\n` only; a bare `\r` (old-Mac terminators,
        // progress-bar rewrites) is a terminator too.
        for line in chunk.split('\r') {
            scan_line(line, prefix, &mut tags);
        }
    }

    Ok(tags)
}

fn scan_line(line: &str, prefix: &str, tags: &mut TagMap) {
    let Some(rest) = line.strip_prefix(prefix) else {
        return;
    };
    // First `:` of the whole line. The prefix itself contains no `:`, so
    // this is also the first `:` after the prefix.
    let Some(colon) = rest.find(':') else {
        tracing::debug!(line, "tag line without ':' skipped");
        return;
    };
    if colon == 0 {
        // `:` directly after the prefix leaves no raw key.
        tracing::debug!(line, "tag line with empty key skipped");
        return;
    }
    match normalize_key(&rest[..colon]) {
        Ok(key) => {
            tags.insert(key, rest[colon + 1..].to_string());
        }
        Err(_) => {
            tracing::debug!(line, "tag line with unnormalizable key skipped");
        }
    }
}
