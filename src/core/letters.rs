//! Letter-level helpers for guesses
//!
//! Normalization of raw input and the letter-pool check that decides whether a
//! guess can be spelled from the root word.

/// Normalize a raw guess: trim surrounding whitespace and lowercase it
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  SilK \n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in characters, not bytes
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// The letters of a root word, each usable once
///
/// A word is spellable from the pool when its letters form a sub-multiset of
/// the pool's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Build a pool from the letters of `root`
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            letters: root.chars().collect(),
        }
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the pool holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a scratch copy: each letter of `word` removes one matching
    /// occurrence, and the first letter with nothing left to remove fails.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.letters.clone();

        for letter in word.chars() {
            let Some(pos) = remaining.iter().position(|&c| c == letter) else {
                return false;
            };
            remaining.swap_remove(pos);
        }

        true
    }
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::is_spellable_from;
///
/// assert!(is_spellable_from("silk", "silkworm"));
/// assert!(!is_spellable_from("silkworms", "silkworm"));
/// ```
#[must_use]
pub fn is_spellable_from(word: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(word)
}
