//! Hint command
//!
//! Lists every dictionary word that would be accepted as the first guess of a
//! round rooted at a given word.

use crate::core::char_len;
use crate::game::{GameEngine, WordListDictionary};
use rayon::prelude::*;

/// Words reachable from one root word
pub struct HintReport {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every listed word
    pub max_score: usize,
}

/// Find all dictionary words a fresh round on `root` would accept
///
/// Each word is judged independently, so the listed words can all be played
/// in the same round and `max_score` is reachable.
#[must_use]
pub fn find_spellable_words(
    engine: &GameEngine,
    root: &str,
    dictionary: &WordListDictionary,
) -> HintReport {
    let round = engine.start_round(&[root]);
    let entries: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = entries
        .par_iter()
        .filter_map(|&word| engine.validate(&round, word, dictionary).ok())
        .collect();

    words.sort_unstable_by(|a, b| char_len(b).cmp(&char_len(a)).then_with(|| a.cmp(b)));
    let max_score = words.iter().map(|w| char_len(w)).sum();

    tracing::debug!(
        root = %round.root_word(),
        found = words.len(),
        scanned = entries.len(),
        "computed hints"
    );

    HintReport {
        root_word: round.root_word().to_string(),
        words,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_spellable_words_sorted() {
        let engine = GameEngine::default();
        let dictionary = WordListDictionary::new(
            "en",
            ["silk", "worms", "milk", "owl", "silkworm", "silkworms", "zinc", "slim"],
        );

        let report = find_spellable_words(&engine, "silkworm", &dictionary);

        assert_eq!(report.root_word, "silkworm");
        assert_eq!(report.words, ["worms", "milk", "silk", "slim"]);
        assert_eq!(report.max_score, 17);
    }

    #[test]
    fn every_hint_is_accepted_in_one_round() {
        let engine = GameEngine::default();
        let dictionary = WordListDictionary::embedded();

        let report = find_spellable_words(&engine, "silkworm", &dictionary);
        assert!(!report.words.is_empty());

        let mut round = engine.start_round(&["silkworm"]);
        for word in &report.words {
            assert!(engine.submit_guess(&mut round, word, &dictionary).is_accepted());
        }
        assert_eq!(round.score(), report.max_score);
    }

    #[test]
    fn no_hints_for_unmatched_root() {
        let engine = GameEngine::default();
        let dictionary = WordListDictionary::new("en", ["silk", "worm"]);

        let report = find_spellable_words(&engine, "xyzzy", &dictionary);
        assert!(report.words.is_empty());
        assert_eq!(report.max_score, 0);
    }
}
