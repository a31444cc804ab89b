//! Per-job cache of the property document.
//!
//! Each job owns a private root directory; the document is persisted there
//! once (`model.json` by default) and read back verbatim on every later
//! access. Logs only grow, so the cached file is never re-validated against
//! the log — callers invalidate by deleting the artifact.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::document::build_document;
use crate::error::Result;
use crate::types::DEFAULT_ARTIFACT_NAME;

/// Cached property document for one job root.
///
/// The cache exclusively owns its artifact file within the root. Concurrent
/// `get_or_build` calls on the same root degrade to last-writer-wins on the
/// artifact; no mutual exclusion is provided.
#[derive(Debug, Clone)]
pub struct JobCache {
    root: PathBuf,
    artifact: String,
}

impl JobCache {
    /// Cache rooted at `root`, using the default artifact name `model.json`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_artifact_name(root, DEFAULT_ARTIFACT_NAME)
    }

    /// Cache with a non-default artifact file name. Plugin variants differ
    /// only in constants like this one.
    pub fn with_artifact_name(root: impl Into<PathBuf>, artifact: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            artifact: artifact.into(),
        }
    }

    /// Location of the cached document.
    pub fn artifact_path(&self) -> PathBuf {
        self.root.join(&self.artifact)
    }

    /// Return the cached document, building it from the log on a miss.
    ///
    /// When the artifact file exists its contents are returned verbatim; the
    /// log is not opened and not re-scanned. Otherwise `open_log` supplies a
    /// fresh stream, the document is built, and persistence is attempted via
    /// a sibling temp file and rename so readers never observe a partial
    /// write. A failed persist is logged at error level and swallowed; the
    /// built document is still returned.
    ///
    /// I/O failures on the primary path (reading an existing artifact,
    /// opening or reading the log) propagate.
    pub fn get_or_build<R, F>(&self, prefix: &str, open_log: F) -> Result<String>
    where
        R: BufRead,
        F: FnOnce() -> io::Result<R>,
    {
        let path = self.artifact_path();
        if path.exists() {
            return Ok(fs::read_to_string(&path)?);
        }

        let document = build_document(open_log()?, prefix)?;

        if let Err(err) = self.persist(&path, &document) {
            tracing::error!(path = %path.display(), %err, "cannot persist property document");
        }

        Ok(document)
    }

    fn persist(&self, path: &Path, document: &str) -> io::Result<()> {
        let tmp = self.root.join(format!("{}.tmp", self.artifact));
        fs::write(&tmp, document)?;
        fs::rename(&tmp, path)
    }
}
