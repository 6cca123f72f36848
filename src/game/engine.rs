//! Word-validation and scoring engine

use super::config::{DEFAULT_ROOT_WORD, EngineConfig};
use super::dictionary::DictionaryChecker;
use crate::core::{Rejection, Round, ValidationOutcome, char_len, is_spellable_from, normalize};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// Starts rounds and judges guesses
///
/// The engine holds only its fixed rules. All game state lives in the
/// [`Round`] the caller owns and passes in.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a fresh round with a root word picked uniformly at random
    ///
    /// Blank candidates are ignored. If none remain, the round uses the
    /// configured fallback root word, normalized, or `silkworm` when the
    /// fallback is blank. This never fails.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::GameEngine;
    ///
    /// let engine = GameEngine::default();
    /// let round = engine.start_round(&["silkworm"]);
    /// assert_eq!(round.root_word(), "silkworm");
    /// assert_eq!(round.score(), 0);
    /// ```
    pub fn start_round<S: AsRef<str>>(&self, candidates: &[S]) -> Round {
        self.start_round_with_rng(candidates, &mut rand::rng())
    }

    /// Like [`start_round`](Self::start_round), drawing from the given RNG
    pub fn start_round_with_rng<S, R>(&self, candidates: &[S], rng: &mut R) -> Round
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let usable: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();

        let root = if let Some(word) = usable.choose(rng) {
            word.to_lowercase()
        } else {
            warn!(
                fallback = %self.config.fallback_root,
                "no usable root word candidates, using fallback"
            );
            let fallback = normalize(&self.config.fallback_root);
            if fallback.is_empty() {
                DEFAULT_ROOT_WORD.to_string()
            } else {
                fallback
            }
        };

        debug!(root = %root, candidates = usable.len(), "started round");
        Round::new(root)
    }

    /// Validate a guess and, if it passes, add it to the round
    ///
    /// Accepted words go to the front of the used list and add their length
    /// to the score. A rejected guess leaves the round untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, ValidationOutcome};
    /// use word_scramble::game::GameEngine;
    ///
    /// fn any_word(_word: &str, _language: &str) -> bool {
    ///     true
    /// }
    ///
    /// let engine = GameEngine::default();
    /// let mut round = engine.start_round(&["silkworm"]);
    ///
    /// let outcome = engine.submit_guess(&mut round, " Silk ", &any_word);
    /// assert_eq!(outcome, ValidationOutcome::Accepted("silk".to_string()));
    /// assert_eq!(round.score(), 4);
    ///
    /// let outcome = engine.submit_guess(&mut round, "SILK", &any_word);
    /// assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::AlreadyUsed));
    /// ```
    pub fn submit_guess<D>(
        &self,
        round: &mut Round,
        raw_input: &str,
        dictionary: &D,
    ) -> ValidationOutcome
    where
        D: DictionaryChecker + ?Sized,
    {
        let result = self.validate(round, raw_input, dictionary);
        match &result {
            Ok(word) => {
                round.record(word.clone());
                debug!(word = %word, score = round.score(), "accepted guess");
            }
            Err(reason) => debug!(input = %raw_input, ?reason, "rejected guess"),
        }
        result.into()
    }

    /// Run the checks without touching the round
    ///
    /// Returns the normalized word on success. Checks run in a fixed order
    /// and the first failure decides the rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing check.
    pub fn validate<D>(
        &self,
        round: &Round,
        raw_input: &str,
        dictionary: &D,
    ) -> Result<String, Rejection>
    where
        D: DictionaryChecker + ?Sized,
    {
        let word = normalize(raw_input);

        if word.is_empty() {
            return Err(Rejection::Empty);
        }

        if word == round.root_word() {
            return Err(Rejection::SameAsRoot);
        }

        if char_len(&word) < self.config.min_word_length {
            return Err(Rejection::TooShort);
        }

        if round.is_used(&word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !is_spellable_from(&word, round.root_word()) {
            return Err(Rejection::NotSpellableFromRoot);
        }

        if !dictionary.is_recognized(&word, &self.config.language) {
            return Err(Rejection::NotARecognizedWord);
        }

        Ok(word)
    }
}
