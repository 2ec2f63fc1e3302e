//! # stop-words
//!
//! Get lists of common stop words in various languages.
//!
//! Stop words ("the", "and", ...) are conventionally excluded from
//! text-processing tasks like indexing or frequency analysis. This crate
//! loads per-language word lists from a data directory, resolves short
//! language codes to canonical names, caches results in memory, and lets
//! callers register post-processing filters that transform a list after load.
//!
//! ## Features
//!
//! - Short code or full name lookup (`"en"` and `"english"` are equivalent)
//! - In-memory caching keyed by canonical language name
//! - Ordered global and per-language filter pipeline
//! - Bundled word lists for 16 languages, including non-Latin scripts
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use stop_words::{StopWords, WordFilter};
//!
//! let stop_words = StopWords::bundled().unwrap();
//! assert!(stop_words.get_stop_words("en").unwrap().contains(&"the".to_string()));
//!
//! // Unknown languages fail loudly, or quietly through the safe wrapper.
//! assert!(stop_words.get_stop_words("atlantean").is_err());
//! assert!(stop_words.safe_get_stop_words("atlantean").is_empty());
//!
//! // Filters transform freshly loaded lists.
//! let short_words: WordFilter =
//!     Arc::new(|words, _language| words.into_iter().filter(|w| w.len() <= 3).collect());
//! stop_words.add_filter(short_words.clone(), None);
//! let words = stop_words.get_stop_words_with_cache("en", false).unwrap();
//! assert!(words.iter().all(|w| w.len() <= 3));
//! ```

pub mod error;
pub mod filter;
pub mod language;
pub mod loader;

pub use error::{Result, StopWordError};
pub use filter::{FilterRegistry, WordFilter};
pub use language::LanguageMapping;
pub use loader::StopWords;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate version string.
pub fn version() -> &'static str {
    VERSION
}
