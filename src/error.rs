//! Error types for the stop-words library.
//!
//! All failures are represented by the [`StopWordError`] enum. Two kinds can
//! surface from word-list lookups: the requested language is unknown, or the
//! backing word file cannot be read. A third kind can only occur while
//! constructing a loader, when the language mapping resource does not parse.
//!
//! # Examples
//!
//! ```
//! use stop_words::error::{Result, StopWordError};
//!
//! fn example_operation() -> Result<Vec<String>> {
//!     Err(StopWordError::unavailable_language(
//!         "atlantean",
//!         &["english".to_string(), "french".to_string()],
//!     ))
//! }
//!
//! match example_operation() {
//!     Ok(words) => println!("{} words", words.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for stop-words operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides constructor methods for the common error kinds.
#[derive(Error, Debug)]
pub enum StopWordError {
    /// The identifier is neither a known short code nor a canonical name.
    #[error("Language \"{language}\" is unavailable. Available languages: {available}")]
    UnavailableLanguage {
        /// The rejected identifier, exactly as the caller supplied it.
        language: String,
        /// Sorted, comma-joined canonical names.
        available: String,
    },

    /// A word-list or mapping resource could not be opened or read.
    #[error("File \"{path}\" is unreadable. Check your installation. Error: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The language mapping resource is not a valid code-to-name JSON object.
    #[error("Language mapping \"{path}\" is invalid: {source}")]
    InvalidMapping {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for operations that may fail with [`StopWordError`].
pub type Result<T> = std::result::Result<T, StopWordError>;

impl StopWordError {
    /// Create an unavailable-language error listing the valid canonical names.
    ///
    /// `available` is sorted and comma-joined into the message so callers can
    /// discover valid inputs from the error alone.
    pub fn unavailable_language<S: Into<String>>(language: S, available: &[String]) -> Self {
        let mut names: Vec<&str> = available.iter().map(String::as_str).collect();
        names.sort_unstable();
        StopWordError::UnavailableLanguage {
            language: language.into(),
            available: names.join(", "),
        }
    }

    /// Create an unreadable-source error for the given path.
    pub fn unreadable_source<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        StopWordError::UnreadableSource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid-mapping error for the given path.
    pub fn invalid_mapping<P: AsRef<Path>>(path: P, source: serde_json::Error) -> Self {
        StopWordError::InvalidMapping {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
