//! Word sources
//!
//! Where candidate root words come from. The engine never reads files itself;
//! hosts hand it the candidates a [`WordSource`] produced.

use super::error::SetupError;
use crate::wordlists::START_WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use std::path::PathBuf;

/// A supplier of candidate root words
pub trait WordSource {
    /// Produce the candidate words, in list order
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the backing resource cannot be read.
    fn candidates(&self) -> Result<Vec<String>, SetupError>;

    /// Human-readable name used in log and error messages
    fn describe(&self) -> String;
}

/// Words compiled into the binary
pub struct StaticWordSource {
    words: &'static [&'static str],
}

impl StaticWordSource {
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// The bundled start-word list
    #[must_use]
    pub const fn start_words() -> Self {
        Self::new(START_WORDS)
    }
}

impl WordSource for StaticWordSource {
    fn candidates(&self) -> Result<Vec<String>, SetupError> {
        Ok(words_from_slice(self.words))
    }

    fn describe(&self) -> String {
        "embedded start words".to_string()
    }
}

/// Newline-delimited word list on disk, one word per line
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn candidates(&self) -> Result<Vec<String>, SetupError> {
        load_from_file(&self.path).map_err(|source| SetupError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load candidates and require at least one usable word
///
/// Hosts call this once at startup so a missing or empty list surfaces as an
/// initialization error instead of silently falling back every round.
///
/// # Errors
///
/// Returns [`SetupError::Io`] if the source cannot be read and
/// [`SetupError::EmptyWordList`] if it yields no words.
pub fn load_start_words(source: &dyn WordSource) -> Result<Vec<String>, SetupError> {
    let words = source.candidates()?;

    if words.is_empty() {
        return Err(SetupError::EmptyWordList(source.describe()));
    }

    tracing::info!(
        source = %source.describe(),
        count = words.len(),
        "loaded start words"
    );
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_source_{name}_{}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn static_source_yields_start_words() {
        let words = StaticWordSource::start_words().candidates().unwrap();
        assert_eq!(words.len(), START_WORDS.len());
        assert!(words.iter().any(|w| w == "silkworm"));
    }

    #[test]
    fn file_source_reads_words() {
        let path = temp_list("reads", "Notebook\nsilkworm\n\n");
        let words = FileWordSource::new(&path).candidates().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["notebook", "silkworm"]);
    }

    #[test]
    fn missing_file_is_setup_error() {
        let source = FileWordSource::new("no/such/start.txt");
        let err = load_start_words(&source).unwrap_err();

        assert!(matches!(err, SetupError::Io { .. }));
        assert!(err.to_string().contains("no/such/start.txt"));
    }

    #[test]
    fn empty_file_is_setup_error() {
        let path = temp_list("empty", "\n  \n");
        let err = load_start_words(&FileWordSource::new(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, SetupError::EmptyWordList(_)));
    }

    #[test]
    fn empty_static_source_is_setup_error() {
        let source = StaticWordSource::new(&[]);
        assert!(matches!(
            load_start_words(&source),
            Err(SetupError::EmptyWordList(_))
        ));
    }
}
