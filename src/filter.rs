//! Word-list filter pipeline.
//!
//! Filters are transform functions applied to a freshly loaded word list
//! before it is cached. They may remove, add, reorder, or rewrite words
//! arbitrarily. Filters are registered either for one canonical language or
//! globally; registration order is the application order, and global filters
//! always run after language-specific ones.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use stop_words::filter::{FilterRegistry, WordFilter};
//!
//! let mut registry = FilterRegistry::new();
//! let long_words: WordFilter =
//!     Arc::new(|words, _language| words.into_iter().filter(|w| w.len() > 3).collect());
//! registry.add(long_words.clone(), None);
//!
//! let words = vec!["the".to_string(), "about".to_string()];
//! let filtered = registry.apply(words, "english");
//!
//! assert_eq!(filtered, vec!["about".to_string()]);
//! assert!(registry.remove(&long_words, None));
//! ```

use std::sync::Arc;

use ahash::AHashMap;

/// A registered word-list transform.
///
/// Every filter receives the current word list and the canonical language
/// name being loaded, and returns the new word list. Language-specific
/// filters are free to ignore the language argument.
pub type WordFilter = Arc<dyn Fn(Vec<String>, &str) -> Vec<String> + Send + Sync>;

/// Ordered filter buckets, partitioned by canonical language name.
///
/// The global bucket always exists, even when empty; per-language buckets are
/// created lazily on first registration. The registry never inspects filter
/// output beyond treating it as the next word list.
#[derive(Default)]
pub struct FilterRegistry {
    global: Vec<WordFilter>,
    by_language: AHashMap<String, Vec<WordFilter>>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FilterRegistry::default()
    }

    /// Append a filter to the bucket for `language`, or to the global bucket
    /// when `language` is `None`.
    ///
    /// The language key is used exactly as given; it is not resolved, so a
    /// short code registers a bucket no load will ever consult.
    pub fn add(&mut self, filter: WordFilter, language: Option<&str>) {
        match language {
            None => self.global.push(filter),
            Some(language) => self
                .by_language
                .entry(language.to_string())
                .or_default()
                .push(filter),
        }
    }

    /// Remove the first registration of `filter` from the designated bucket.
    ///
    /// Filters are matched by identity (`Arc::ptr_eq`). Returns `true` if a
    /// removal occurred, `false` when the bucket or the filter is absent.
    pub fn remove(&mut self, filter: &WordFilter, language: Option<&str>) -> bool {
        let bucket = match language {
            None => &mut self.global,
            Some(language) => match self.by_language.get_mut(language) {
                Some(bucket) => bucket,
                None => return false,
            },
        };

        match bucket.iter().position(|f| Arc::ptr_eq(f, filter)) {
            Some(index) => {
                bucket.remove(index);
                true
            }
            None => false,
        }
    }

    /// The filters that apply to `language`, in application order: the
    /// language's own bucket first, then the global bucket.
    ///
    /// Returns cheap `Arc` clones so callers can run the chain without
    /// holding a borrow of the registry.
    pub fn chain(&self, language: &str) -> Vec<WordFilter> {
        let specific = self.by_language.get(language).map_or(&[][..], Vec::as_slice);
        specific.iter().chain(self.global.iter()).cloned().collect()
    }

    /// Thread `words` through every applicable filter, feeding each filter's
    /// output to the next.
    pub fn apply(&self, words: Vec<String>, language: &str) -> Vec<String> {
        self.chain(language)
            .iter()
            .fold(words, |words, filter| filter(words, language))
    }

    /// Total number of registered filters across all buckets.
    pub fn len(&self) -> usize {
        self.global.len() + self.by_language.values().map(Vec::len).sum::<usize>()
    }

    /// Check if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("global", &self.global.len())
            .field(
                "by_language",
                &self
                    .by_language
                    .iter()
                    .map(|(language, bucket)| (language.as_str(), bucket.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_apply_without_filters_is_identity() {
        let registry = FilterRegistry::new();

        let input = words(&["the", "a", "an"]);
        assert_eq!(registry.apply(input.clone(), "english"), input);
    }

    #[test]
    fn test_global_filters_apply_in_registration_order() {
        let mut registry = FilterRegistry::new();
        registry.add(
            Arc::new(|words, _| words.into_iter().map(|w| format!("prefix_{w}")).collect()),
            None,
        );
        registry.add(
            Arc::new(|words, _| words.into_iter().map(|w| format!("{w}_suffix")).collect()),
            None,
        );

        let result = registry.apply(words(&["the"]), "english");
        assert_eq!(result, words(&["prefix_the_suffix"]));
    }

    #[test]
    fn test_language_filters_run_before_global_filters() {
        let mut registry = FilterRegistry::new();
        registry.add(
            Arc::new(|mut words, _| {
                words.push("specific".to_string());
                words
            }),
            Some("english"),
        );
        registry.add(
            Arc::new(|mut words, _| {
                words.push("global".to_string());
                words
            }),
            None,
        );

        let result = registry.apply(Vec::new(), "english");
        assert_eq!(result, words(&["specific", "global"]));
    }

    #[test]
    fn test_language_filters_only_apply_to_their_language() {
        let mut registry = FilterRegistry::new();
        registry.add(
            Arc::new(|words, _| words.into_iter().map(|w| w.to_uppercase()).collect()),
            Some("english"),
        );

        assert_eq!(registry.apply(words(&["le"]), "french"), words(&["le"]));
        assert_eq!(registry.apply(words(&["the"]), "english"), words(&["THE"]));
    }

    #[test]
    fn test_filters_receive_the_canonical_language() {
        let mut registry = FilterRegistry::new();
        registry.add(
            Arc::new(|_, language| vec![language.to_string()]),
            None,
        );

        assert_eq!(registry.apply(Vec::new(), "german"), words(&["german"]));
    }

    #[test]
    fn test_language_key_is_not_resolved() {
        let mut registry = FilterRegistry::new();
        registry.add(Arc::new(|_, _| Vec::new()), Some("en"));

        // The bucket key "en" never matches the canonical name "english".
        let input = words(&["the"]);
        assert_eq!(registry.apply(input.clone(), "english"), input);
    }

    #[test]
    fn test_remove_returns_true_exactly_once() {
        let mut registry = FilterRegistry::new();
        let filter: WordFilter = Arc::new(|words, _| words);
        registry.add(filter.clone(), None);

        assert!(registry.remove(&filter, None));
        assert!(!registry.remove(&filter, None));
    }

    #[test]
    fn test_remove_from_absent_bucket_returns_false() {
        let mut registry = FilterRegistry::new();
        let filter: WordFilter = Arc::new(|words, _| words);

        assert!(!registry.remove(&filter, Some("english")));
    }

    #[test]
    fn test_remove_matches_by_identity_not_by_code() {
        let mut registry = FilterRegistry::new();
        let registered: WordFilter = Arc::new(|words, _| words);
        let lookalike: WordFilter = Arc::new(|words, _| words);
        registry.add(registered.clone(), None);

        assert!(!registry.remove(&lookalike, None));
        assert!(registry.remove(&registered, None));
    }

    #[test]
    fn test_remove_language_filter() {
        let mut registry = FilterRegistry::new();
        let filter: WordFilter = Arc::new(|words, _| words);
        registry.add(filter.clone(), Some("english"));

        // Wrong bucket first, then the right one.
        assert!(!registry.remove(&filter, None));
        assert!(registry.remove(&filter, Some("english")));
        assert!(!registry.remove(&filter, Some("english")));
    }

    #[test]
    fn test_filter_may_return_empty_or_unrelated_output() {
        let mut registry = FilterRegistry::new();
        registry.add(Arc::new(|_, _| Vec::new()), None);
        assert!(registry.apply(words(&["the", "a"]), "english").is_empty());

        let mut registry = FilterRegistry::new();
        registry.add(
            Arc::new(|mut words, _| {
                words.push("custom1".to_string());
                words.push("custom2".to_string());
                words
            }),
            None,
        );
        let result = registry.apply(words(&["the"]), "english");
        assert_eq!(result, words(&["the", "custom1", "custom2"]));
    }

    #[test]
    fn test_len_counts_all_buckets() {
        let mut registry = FilterRegistry::new();
        assert!(registry.is_empty());

        registry.add(Arc::new(|words, _| words), None);
        registry.add(Arc::new(|words, _| words), Some("english"));
        registry.add(Arc::new(|words, _| words), Some("french"));

        assert_eq!(registry.len(), 3);
    }
}
