//! Setup errors
//!
//! Failures while preparing a game (loading word lists). Rejected guesses are
//! not errors; see [`Rejection`](crate::core::Rejection).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// A word list file could not be read
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word source produced no usable words
    #[error("word list {0} contains no usable words")]
    EmptyWordList(String),
}
