//! Formatting utilities shared by the CLI and the TUI

use crate::core::Rejection;

/// User-facing alert for a rejected guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Title and message shown when a guess is rejected
#[must_use]
pub fn rejection_alert(rejection: Rejection, root_word: &str) -> Alert {
    let (title, message) = match rejection {
        Rejection::Empty => ("Nothing to check".to_string(), "Type a word first!".to_string()),
        Rejection::SameAsRoot => (
            format!("Word is the same as '{root_word}'!"),
            "That is the same word as the given word!".to_string(),
        ),
        Rejection::TooShort => (
            "Word is too short".to_string(),
            "Come up with more than words like cat or dog!".to_string(),
        ),
        Rejection::AlreadyUsed => ("Word used already".to_string(), "Be more original!".to_string()),
        Rejection::NotSpellableFromRoot => (
            "Word not possible".to_string(),
            format!("You can't spell that word from '{root_word}'!"),
        ),
        Rejection::NotARecognizedWord => (
            "Word not recognized".to_string(),
            "You can't just make up words!".to_string(),
        ),
    };

    Alert { title, message }
}

/// Circled length marker shown next to a used word
///
/// Lengths 1 to 20 use the circled digits; anything else falls back to
/// parentheses.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match u32::try_from(length) {
        Ok(n @ 1..=20) => char::from_u32(0x2460 + n - 1)
            .map_or_else(|| format!("({length})"), |c| c.to_string()),
        _ => format!("({length})"),
    }
}

/// "1 point" / "N points"
#[must_use]
pub fn score_label(score: usize) -> String {
    if score == 1 {
        "1 point".to_string()
    } else {
        format!("{score} points")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_mention_root_word() {
        let alert = rejection_alert(Rejection::NotSpellableFromRoot, "silkworm");
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You can't spell that word from 'silkworm'!");

        let alert = rejection_alert(Rejection::SameAsRoot, "silkworm");
        assert_eq!(alert.title, "Word is the same as 'silkworm'!");
    }

    #[test]
    fn alerts_for_every_rejection() {
        for rejection in [
            Rejection::Empty,
            Rejection::SameAsRoot,
            Rejection::TooShort,
            Rejection::AlreadyUsed,
            Rejection::NotSpellableFromRoot,
            Rejection::NotARecognizedWord,
        ] {
            let alert = rejection_alert(rejection, "cat");
            assert!(!alert.title.is_empty());
            assert!(!alert.message.is_empty());
        }
    }

    #[test]
    fn badge_uses_circled_digits() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_falls_back_outside_range() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn score_label_pluralizes() {
        assert_eq!(score_label(0), "0 points");
        assert_eq!(score_label(1), "1 point");
        assert_eq!(score_label(13), "13 points");
    }
}
