//! Bundled word lists
//!
//! The start-word list (candidate root words) and the English dictionary,
//! compiled into the binary so the game runs without any resource files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_eight_letters() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Start word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_is_lowercase() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Dictionary word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_dictionary_words() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn default_root_is_bundled() {
        assert!(START_WORDS.contains(&"silkworm"));
        assert!(DICTIONARY.contains(&"silk"));
    }
}
