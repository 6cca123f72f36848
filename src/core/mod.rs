//! Core domain types for the word game
//!
//! Round state, validation outcomes and letter helpers. Nothing here touches
//! I/O, randomness or the dictionary.

mod letters;
mod outcome;
mod round;

pub use letters::{LetterPool, char_len, is_spellable_from, normalize};
pub use outcome::{Rejection, ValidationOutcome};
pub use round::Round;
