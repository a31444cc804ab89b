//! Normalizer — canonicalizes raw tag keys.
//!
//! `Model-Id` becomes `modelId`. The transformation is exactly: remove every
//! `-`, then lowercase the first remaining character. There is no
//! camel-casing across the removed hyphens; `Model-id` becomes `modelid`.
//! Tag emitters are expected to capitalize each segment themselves.

use crate::error::{Error, Result};

/// Canonicalize a raw tag key.
///
/// Fails with [`Error::InvalidKey`] when nothing remains after `-` removal.
/// Already-canonical keys (no `-`, lowercase first character) pass through
/// unchanged.
pub fn normalize_key(raw: &str) -> Result<String> {
    let stripped: String = raw.chars().filter(|&c| c != '-').collect();
    let mut chars = stripped.chars();
    match chars.next() {
        None => Err(Error::InvalidKey(raw.to_string())),
        Some(first) => {
            let mut key = String::with_capacity(stripped.len());
            key.extend(first.to_lowercase());
            key.push_str(chars.as_str());
            Ok(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hyphens_removed_and_first_char_lowercased() {
        assert_eq!(normalize_key("Model-Id").unwrap(), "modelId");
        assert_eq!(normalize_key("Model-File-Name").unwrap(), "modelFileName");
    }

    #[test]
    fn canonical_keys_pass_through() {
        assert_eq!(normalize_key("anotherProperty").unwrap(), "anotherProperty");
        assert_eq!(normalize_key("modelId").unwrap(), "modelId");
    }

    #[test]
    fn only_first_char_is_lowercased() {
        assert_eq!(normalize_key("Model-id").unwrap(), "modelid");
        assert_eq!(normalize_key("MODEL").unwrap(), "mODEL");
    }

    #[test]
    fn all_hyphen_key_is_invalid() {
        assert!(matches!(normalize_key("---"), Err(Error::InvalidKey(_))));
    }
}
