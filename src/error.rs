//! Error type shared across the crate.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A raw tag key contained nothing but `-` characters.
    #[error("tag key {0:?} is empty after normalization")]
    InvalidKey(String),

    /// The log stream, the cached artifact, or a script destination failed
    /// at the I/O level.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A property document (freshly built or read back) is not a valid JSON
    /// object of string fields.
    #[error("property document is not a valid JSON object")]
    Document(#[from] serde_json::Error),

    /// No bundled resource with the given name.
    #[error("no bundled resource named {0:?}")]
    ResourceNotFound(String),
}
