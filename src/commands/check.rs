//! Guess checking command
//!
//! Runs a sequence of guesses against a fresh round with a fixed root word.

use crate::core::ValidationOutcome;
use crate::game::{DictionaryChecker, GameEngine};

/// One guess and what the engine made of it
pub struct CheckStep {
    pub input: String,
    pub outcome: ValidationOutcome,
    pub score_after: usize,
}

/// Result of checking a list of guesses
pub struct CheckReport {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub used_words: Vec<String>,
    pub score: usize,
}

impl CheckReport {
    /// Number of guesses that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_accepted()).count()
    }
}

/// Submit `guesses` in order to a new round rooted at `root`
///
/// A blank `root` falls back to the engine's default root word.
#[must_use]
pub fn run_check<S, D>(engine: &GameEngine, root: &str, guesses: &[S], dictionary: &D) -> CheckReport
where
    S: AsRef<str>,
    D: DictionaryChecker + ?Sized,
{
    let mut round = engine.start_round(&[root]);

    let steps = guesses
        .iter()
        .map(|guess| {
            let input = guess.as_ref().to_string();
            let outcome = engine.submit_guess(&mut round, &input, dictionary);
            CheckStep {
                input,
                outcome,
                score_after: round.score(),
            }
        })
        .collect();

    CheckReport {
        root_word: round.root_word().to_string(),
        steps,
        used_words: round.used_words().to_vec(),
        score: round.score(),
    }
}
