//! Shared types and constants.

use std::collections::BTreeMap;

/// Mapping from canonical tag key to raw string value.
///
/// If the same canonical key appears on several tag lines, the last
/// occurrence in the log wins. A `BTreeMap` keeps the serialized document
/// deterministic; consumers must not rely on field order regardless.
pub type TagMap = BTreeMap<String, String>;

/// Recognition prefix emitted by DRun-era notebooks (`X-DRun-Model-Id:m1`).
pub const DRUN_PREFIX: &str = "X-DRun-";

/// Recognition prefix emitted by Legion-era notebooks (`X-Legion-Model-Id:m1`).
pub const LEGION_PREFIX: &str = "X-Legion-";

/// Default file name of the cached property document inside a job root.
pub const DEFAULT_ARTIFACT_NAME: &str = "model.json";
