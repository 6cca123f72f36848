//! Engine configuration

/// Root word used when no usable candidate is available
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Shortest accepted guess, in characters
pub const MIN_WORD_LENGTH: usize = 4;

/// Language tag passed to the dictionary
pub const DICTIONARY_LANGUAGE: &str = "en";

/// Fixed rules the engine validates against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Guesses shorter than this many characters are rejected as too short
    pub min_word_length: usize,
    /// Language tag handed to the dictionary with every lookup
    pub language: String,
    /// Root word for a round started without usable candidates
    pub fallback_root: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            language: DICTIONARY_LANGUAGE.to_string(),
            fallback_root: DEFAULT_ROOT_WORD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.language, "en");
        assert_eq!(config.fallback_root, "silkworm");
    }
}
