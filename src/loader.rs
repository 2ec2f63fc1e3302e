//! Stop-word loading, caching, and the public lookup surface.
//!
//! [`StopWords`] owns the language mapping, an in-memory cache keyed by
//! canonical language name, and the filter registry. Word lists are read from
//! one UTF-8 text file per canonical language (one word per line) inside the
//! data directory the loader was opened on.
//!
//! The cache and the filter registry are guarded by `parking_lot` locks so a
//! shared loader can be used from multiple threads; cached entries never
//! expire and are cleared only by explicit caller action.
//!
//! # Examples
//!
//! ```
//! use stop_words::loader::StopWords;
//!
//! let stop_words = StopWords::bundled().unwrap();
//!
//! let words = stop_words.get_stop_words("en").unwrap();
//! assert!(words.contains(&"the".to_string()));
//!
//! // "en" and "english" resolve to the same canonical name and share one
//! // cache slot.
//! assert_eq!(words, stop_words.get_stop_words("english").unwrap());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::{Result, StopWordError};
use crate::filter::{FilterRegistry, WordFilter};
use crate::language::LanguageMapping;

/// File name of the code-to-name mapping inside a data directory.
const LANGUAGES_FILE: &str = "languages.json";

/// Data directory bundled with the crate.
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/stop-words");

/// Loader for per-language stop-word lists.
///
/// A lookup resolves the identifier to a canonical name, serves a cached copy
/// when one exists, and otherwise reads the word file, runs the filter
/// pipeline over it, and caches the filtered result. Every lookup returns an
/// independent copy: mutating a returned list never affects the cache or
/// later calls.
#[derive(Debug)]
pub struct StopWords {
    data_dir: PathBuf,
    mapping: LanguageMapping,
    cache: RwLock<AHashMap<String, Vec<String>>>,
    filters: RwLock<FilterRegistry>,
}

impl StopWords {
    /// Open a loader on a data directory containing `languages.json` and one
    /// `<canonical>.txt` file per language.
    ///
    /// Fails if the mapping resource is missing or does not parse; there is
    /// no recovery path from a broken mapping.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let mapping = LanguageMapping::from_file(data_dir.join(LANGUAGES_FILE))?;

        Ok(StopWords {
            data_dir,
            mapping,
            cache: RwLock::new(AHashMap::new()),
            filters: RwLock::new(FilterRegistry::new()),
        })
    }

    /// Open a loader on the data directory shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::open(BUNDLED_DATA_DIR)
    }

    /// Get the stop words for a language, using the cache.
    ///
    /// `language` may be a short code (`"en"`) or a canonical name
    /// (`"english"`); both share one cache slot.
    pub fn get_stop_words(&self, language: &str) -> Result<Vec<String>> {
        self.get_stop_words_with_cache(language, true)
    }

    /// Get the stop words for a language, optionally bypassing the cache.
    ///
    /// With `use_cache` set, a cached entry is returned as-is: no file
    /// access, no filter re-application. Without it the word file is re-read
    /// and re-filtered on every call and the cache is neither consulted nor
    /// written, so callers can observe live filter changes.
    ///
    /// A failed resolve or a failed read never populates the cache.
    pub fn get_stop_words_with_cache(&self, language: &str, use_cache: bool) -> Result<Vec<String>> {
        let canonical = self.mapping.resolve(language)?.to_string();

        if use_cache {
            if let Some(words) = self.cache.read().get(&canonical) {
                return Ok(words.clone());
            }
        }

        let words = self.load(&canonical)?;

        if use_cache {
            self.cache.write().insert(canonical, words.clone());
        }

        Ok(words)
    }

    /// Get the stop words for a language, returning an empty list on error.
    ///
    /// This is the sole recovery boundary: any [`StopWordError`] from
    /// [`get_stop_words`](Self::get_stop_words) becomes `vec![]`. A panic
    /// raised by a registered filter is not caught.
    pub fn safe_get_stop_words(&self, language: &str) -> Vec<String> {
        self.get_stop_words(language).unwrap_or_default()
    }

    /// Read and filter the word file for an already-canonical language name.
    fn load(&self, canonical: &str) -> Result<Vec<String>> {
        let path = self.data_dir.join(format!("{canonical}.txt"));
        let content =
            fs::read_to_string(&path).map_err(|e| StopWordError::unreadable_source(&path, e))?;

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        // Clone the chain out of the registry so filters run without holding
        // the lock; a filter may itself register or remove filters.
        let chain = self.filters.read().chain(canonical);
        Ok(chain.iter().fold(words, |words, filter| filter(words, canonical)))
    }

    /// Register a filter for one language, or globally when `language` is
    /// `None`.
    ///
    /// Filters only apply to loads performed after registration; entries
    /// already in the cache are unaffected until the cache is cleared or the
    /// load is repeated with the cache bypassed.
    pub fn add_filter(&self, filter: WordFilter, language: Option<&str>) {
        self.filters.write().add(filter, language);
    }

    /// Unregister a previously registered filter.
    ///
    /// Returns `true` if the filter was found (by identity) and removed.
    pub fn remove_filter(&self, filter: &WordFilter, language: Option<&str>) -> bool {
        self.filters.write().remove(filter, language)
    }

    /// Drop every cached word list.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Check whether a canonical language name has a cache entry.
    pub fn is_cached(&self, canonical: &str) -> bool {
        self.cache.read().contains_key(canonical)
    }

    /// Canonical names currently present in the cache, sorted.
    pub fn cached_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.cache.read().keys().cloned().collect();
        languages.sort_unstable();
        languages
    }

    /// All canonical language names this loader can serve, sorted.
    pub fn available_languages(&self) -> &[String] {
        self.mapping.available_languages()
    }

    /// The short-code mapping this loader resolves identifiers with.
    pub fn mapping(&self) -> &LanguageMapping {
        &self.mapping
    }

    /// The directory word files are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::bundled().expect("bundled stop word data should be loadable")
    }
}
