//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_hint_report, print_outcome, print_round};
pub use formatters::{Alert, length_badge, rejection_alert, score_label};
