//! Dictionary lookups
//!
//! The engine asks a [`DictionaryChecker`] whether a guess is a real word.
//! Any backing works: the bundled word list, a user-supplied file, or a plain
//! closure in tests.

use super::config::DICTIONARY_LANGUAGE;
use super::error::SetupError;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Reports whether a word is spelled correctly in a language
pub trait DictionaryChecker {
    /// Check `word` against the dictionary for `language`
    ///
    /// `word` is already normalized (lowercase, trimmed).
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<F> DictionaryChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// In-memory word list bound to a single language
///
/// Lookups for any other language tag report the word as unrecognized.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from words; entries are trimmed and lowercased
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The bundled English dictionary
    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::new(DICTIONARY_LANGUAGE, DICTIONARY);
        tracing::info!(count = dictionary.len(), "loaded embedded dictionary");
        dictionary
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Io`] if the file cannot be read and
    /// [`SetupError::EmptyWordList`] if it holds no words.
    pub fn from_file(path: impl AsRef<Path>, language: &str) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if words.is_empty() {
            return Err(SetupError::EmptyWordList(path.display().to_string()));
        }

        let dictionary = Self::new(language, words);
        tracing::info!(
            path = %path.display(),
            count = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// All words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_recognizes_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.language(), "en");

        assert!(dictionary.is_recognized("silk", "en"));
        assert!(dictionary.is_recognized("worm", "en"));
        assert!(!dictionary.is_recognized("wrms", "en"));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let dictionary = WordListDictionary::new("en", ["Silk", " worm "]);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("SILK"));
        assert!(dictionary.contains("worm"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn other_languages_are_unrecognized() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(dictionary.is_recognized("silk", "EN"));
        assert!(!dictionary.is_recognized("silk", "fr"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let dictionary = WordListDictionary::new("en", ["", "  ", "milk"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn closures_are_checkers() {
        let only_silk = |word: &str, _language: &str| word == "silk";
        assert!(only_silk.is_recognized("silk", "en"));
        assert!(!only_silk.is_recognized("milk", "en"));
    }

    #[test]
    fn missing_file_is_setup_error() {
        let result = WordListDictionary::from_file("no/such/dictionary.txt", "en");
        assert!(matches!(result, Err(SetupError::Io { .. })));
    }

    #[test]
    fn from_file_loads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_dictionary_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "silk\nmilk\n").unwrap();

        let dictionary = WordListDictionary::from_file(&path, "en").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_recognized("milk", "en"));
    }
}
