//! Language identifier resolution.
//!
//! Maps user-supplied identifiers (ISO-style short codes like `en`, or full
//! canonical names like `english`) to the canonical full name used as the
//! cache and file-lookup key. The mapping is loaded once from a JSON resource
//! and is immutable afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StopWordError};

/// Static mapping from short language code to canonical full name.
///
/// The mapping's values are the universe of canonical language identifiers:
/// an input that is already a canonical name resolves to itself even though
/// it is not a key.
///
/// Resolution is case-sensitive and exact-match only.
///
/// # Examples
///
/// ```
/// use stop_words::language::LanguageMapping;
///
/// let mapping = LanguageMapping::from_json(r#"{"en": "english", "fr": "french"}"#).unwrap();
///
/// assert_eq!(mapping.resolve("en").unwrap(), "english");
/// assert_eq!(mapping.resolve("english").unwrap(), "english");
/// assert!(mapping.resolve("EN").is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct LanguageMapping {
    codes: BTreeMap<String, String>,
    available: Vec<String>,
}

impl From<BTreeMap<String, String>> for LanguageMapping {
    fn from(codes: BTreeMap<String, String>) -> Self {
        let mut available: Vec<String> = codes.values().cloned().collect();
        available.sort_unstable();
        available.dedup();
        LanguageMapping { codes, available }
    }
}

impl LanguageMapping {
    /// Load the mapping from a JSON file containing one object of
    /// short code to canonical name entries.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| StopWordError::unreadable_source(path, e))?;
        serde_json::from_str(&content).map_err(|e| StopWordError::invalid_mapping(path, e))
    }

    /// Parse the mapping from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve an identifier to its canonical language name.
    ///
    /// A known short code resolves to its mapped value; an identifier that is
    /// already a canonical name resolves to itself. Anything else fails with
    /// [`StopWordError::UnavailableLanguage`] whose message enumerates the
    /// available canonical names.
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> Result<&'a str> {
        if let Some(name) = self.codes.get(identifier) {
            return Ok(name);
        }
        if self.available.binary_search_by(|name| name.as_str().cmp(identifier)).is_ok() {
            return Ok(identifier);
        }
        Err(StopWordError::unavailable_language(identifier, &self.available))
    }

    /// All canonical language names, sorted and deduplicated.
    pub fn available_languages(&self) -> &[String] {
        &self.available
    }

    /// The raw short-code to canonical-name entries.
    pub fn codes(&self) -> &BTreeMap<String, String> {
        &self.codes
    }

    /// Number of short-code entries.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
