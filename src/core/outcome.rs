//! Validation outcomes
//!
//! Every guess produces a [`ValidationOutcome`]. A rejection is an ordinary,
//! reportable result; nothing here is fatal.

use thiserror::Error;

/// Why a guess was turned down
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("the guess is empty")]
    Empty,
    #[error("the guess is the root word itself")]
    SameAsRoot,
    #[error("the guess is too short")]
    TooShort,
    #[error("the guess was already used this round")]
    AlreadyUsed,
    #[error("the guess cannot be spelled from the root word")]
    NotSpellableFromRoot,
    #[error("the guess is not a recognized word")]
    NotARecognizedWord,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The normalized word was added to the round
    Accepted(String),
    /// The guess failed a check and the round is unchanged
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The accepted word, if any
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Accepted(word) => Some(word),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<String, Rejection>> for ValidationOutcome {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(word) => Self::Accepted(word),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_accessors() {
        let outcome = ValidationOutcome::Accepted("silk".to_string());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.word(), Some("silk"));
        assert_eq!(outcome.rejection(), None);
    }

    #[test]
    fn rejected_accessors() {
        let outcome = ValidationOutcome::Rejected(Rejection::TooShort);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.word(), None);
        assert_eq!(outcome.rejection(), Some(Rejection::TooShort));
    }

    #[test]
    fn from_result() {
        let ok: Result<String, Rejection> = Ok("worm".to_string());
        assert_eq!(
            ValidationOutcome::from(ok),
            ValidationOutcome::Accepted("worm".to_string())
        );

        let err: Result<String, Rejection> = Err(Rejection::AlreadyUsed);
        assert_eq!(
            ValidationOutcome::from(err),
            ValidationOutcome::Rejected(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::Empty.to_string(), "the guess is empty");
        assert_eq!(
            Rejection::NotSpellableFromRoot.to_string(),
            "the guess cannot be spelled from the root word"
        );
    }
}
