//! Round state
//!
//! A round is one play session: a root word, the words accepted so far and the
//! running score. The caller owns it; the engine only mutates it on an
//! accepted guess.

use super::letters::char_len;

/// One play session against a single root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    /// Start an empty round for `root_word`
    ///
    /// The root word must already be lowercase and non-empty; rounds are
    /// created through [`GameEngine::start_round`](crate::game::GameEngine::start_round).
    pub(crate) fn new(root_word: String) -> Self {
        debug_assert!(!root_word.is_empty(), "root word must not be empty");

        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// The word every guess must be spelled from
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Running score: one point per character of every accepted word
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Check whether a normalized word was already accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Recompute the score from the used words
    ///
    /// Always equal to [`score`](Self::score).
    #[must_use]
    pub fn recomputed_score(&self) -> usize {
        self.used_words.iter().map(|w| char_len(w)).sum()
    }

    /// Record an accepted word at the front of the list and add its length
    pub(crate) fn record(&mut self, word: String) {
        self.score += char_len(&word);
        self.used_words.insert(0, word);
    }
}
