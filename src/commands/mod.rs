//! Command implementations

pub mod check;
pub mod simple;
pub mod words;

pub use check::{CheckReport, CheckStep, run_check};
pub use simple::run_simple;
pub use words::{HintReport, find_spellable_words};
