//! Game engine and its collaborators
//!
//! The engine validates guesses against a caller-owned round. Root words come
//! from a [`WordSource`]; real-word checks go through a [`DictionaryChecker`].

pub mod config;
pub mod dictionary;
mod engine;
pub mod error;
pub mod source;

pub use config::EngineConfig;
pub use dictionary::{DictionaryChecker, WordListDictionary};
pub use engine::GameEngine;
pub use error::SetupError;
pub use source::{FileWordSource, StaticWordSource, WordSource, load_start_words};
