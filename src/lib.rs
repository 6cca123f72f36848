//! Word Scramble
//!
//! A single-player word game: spell real words from the letters of a random
//! root word and score one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, ValidationOutcome};
//! use word_scramble::game::{GameEngine, WordListDictionary};
//!
//! let engine = GameEngine::default();
//! let dictionary = WordListDictionary::embedded();
//! let mut round = engine.start_round(&["silkworm"]);
//!
//! let outcome = engine.submit_guess(&mut round, "silk", &dictionary);
//! assert_eq!(outcome, ValidationOutcome::Accepted("silk".to_string()));
//!
//! let outcome = engine.submit_guess(&mut round, "silkworms", &dictionary);
//! assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::NotSpellableFromRoot));
//! assert_eq!(round.score(), 4);
//! ```

// Core domain types
pub mod core;

// Validation engine, word sources and dictionaries
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
