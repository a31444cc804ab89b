//! logtag — build-log tag extraction and per-job property documents.
//!
//! A CI job (typically a notebook-driven model build) announces metadata by
//! printing header-style tag lines into its own log:
//!
//! ```text
//! X-Legion-Model-Id:income-classifier
//! X-Legion-Model-File-Name:/workspace/export/income.model
//! ```
//!
//! This crate scans the log for such lines, canonicalizes the keys
//! (`Model-Id` → `modelId`), and exposes the result both as a [`TagMap`] and
//! as a JSON property document cached per job ([`JobCache`]). A companion
//! helper materializes the bundled pipeline script into a job workspace
//! ([`materialize_script`]).
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Scanner ──► Document ──► JobCache
//! ```
//!
//! Everything is synchronous and single-threaded per call. Callers that share
//! a job root across threads provide their own serialization; concurrent
//! cache writes degrade to last-writer-wins.

pub mod cache;
pub mod document;
pub mod error;
pub mod materializer;
pub mod normalizer;
pub mod scanner;
pub mod types;

pub use cache::JobCache;
pub use document::{build_document, parse_document};
pub use error::{Error, Result};
pub use materializer::{materialize_from, materialize_script};
pub use normalizer::normalize_key;
pub use scanner::scan_log;
pub use types::{TagMap, DEFAULT_ARTIFACT_NAME, DRUN_PREFIX, LEGION_PREFIX};
