/// Error types for the text analyzer
///
/// Counting itself never fails. These errors come from validating caller input,
/// building vocabularies and reading input files.

use std::path::PathBuf;

/// Errors raised while configuring or running an analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The input text was empty or contained only whitespace
    #[error("Nothing to analyze: input text is empty")]
    EmptyInput,

    /// A vocabulary listed the same word twice (compared case-insensitively)
    #[error("Vocabulary '{vocabulary}' contains duplicate word '{word}'")]
    DuplicateWord { vocabulary: String, word: String },

    /// A vocabulary entry was empty or contained whitespace
    #[error("Vocabulary '{vocabulary}' contains invalid word {word:?}")]
    InvalidWord { vocabulary: String, word: String },

    /// Two vocabularies were configured under the same name
    #[error("Vocabulary '{name}' is defined more than once")]
    DuplicateVocabulary { name: String },

    /// The whole-word matcher could not be compiled
    #[error("Failed to compile matcher for vocabulary '{vocabulary}': {source}")]
    Pattern {
        vocabulary: String,
        #[source]
        source: regex::Error,
    },

    /// Reading an input file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was missing or malformed
    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
