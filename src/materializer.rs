//! Materializer — writes bundled script resources into a job workspace.
//!
//! The pipeline helper shipped with the crate has to exist on disk before
//! the job's build steps can load it, so it is copied into a `scripts/`
//! subdirectory of the workspace on demand. The copy is line-based and
//! re-emits the host's native line separator, matching what the build steps
//! expect on their platform; it is deliberately not a byte-exact copy.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Subdirectory of the workspace that receives materialized scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Name of the bundled pipeline helper.
pub const LEGION_SCRIPT_NAME: &str = "legion.groovy";

const LEGION_SCRIPT: &str = include_str!("../resources/legion.groovy");

const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn resource(name: &str) -> Option<&'static str> {
    match name {
        LEGION_SCRIPT_NAME => Some(LEGION_SCRIPT),
        _ => None,
    }
}

/// Copy the named bundled resource to `<work_dir>/scripts/<name>` and return
/// the destination path.
///
/// `scripts/` is created if absent (single level; `work_dir` itself must
/// exist). An existing destination file is overwritten, so repeated calls
/// are idempotent. Fails with [`Error::ResourceNotFound`] for names the
/// crate does not bundle.
pub fn materialize_script(work_dir: &Path, name: &str) -> Result<PathBuf> {
    let text = resource(name).ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
    materialize_from(work_dir, name, Cursor::new(text))
}

/// Like [`materialize_script`], but with a caller-supplied resource stream.
/// Hosts with their own resource namespace feed it through here.
pub fn materialize_from<R: BufRead>(work_dir: &Path, name: &str, resource: R) -> Result<PathBuf> {
    let dir = work_dir.join(SCRIPTS_DIR);
    match fs::create_dir(&dir) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
        Err(err) => return Err(err.into()),
    }

    let dest = dir.join(name);
    let mut writer = BufWriter::new(File::create(&dest)?);
    for line in resource.lines() {
        writer.write_all(line?.as_bytes())?;
        writer.write_all(LINE_SEPARATOR.as_bytes())?;
    }
    writer.flush()?;

    Ok(dest)
}
