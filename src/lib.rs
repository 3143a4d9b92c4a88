/// Text Analyzer - counts characters, words and closed-class vocabulary in text
///
/// This library provides the counting engine (letters, words, spaces, newlines,
/// special symbols) and whole-word, case-insensitive tallies of pronouns,
/// prepositions, indefinite articles or any other configured word list.

// Re-export core modules
pub mod config;
pub mod core;
pub mod utils;

use lazy_static::lazy_static;

// Re-export main analyzer types for convenience
pub use crate::config::AnalyzerConfig;
pub use crate::core::analyzer::{TextAnalysis, TextAnalyzer, VocabularyCounts};
pub use crate::core::counter::{count_basics, BasicCounts};
pub use crate::core::error::AnalyzerError;
pub use crate::core::sample::SAMPLE_TEXT;
pub use crate::core::vocabulary::{count_vocabulary, FrequencyEntry, FrequencyTable, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static! {
    /// Analyzer with the built-in vocabularies, compiled on first use
    static ref DEFAULT_ANALYZER: TextAnalyzer = TextAnalyzer::default();
}

/// Analyze text with the built-in vocabularies
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `text` - Text to analyze
///
/// # Returns
///
/// The analysis, or `AnalyzerError::EmptyInput` for blank text
pub fn analyze_text(text: &str) -> Result<TextAnalysis, AnalyzerError> {
    DEFAULT_ANALYZER.analyze_input(text)
}

/// Read and analyze a single file with the built-in vocabularies
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P) -> Result<TextAnalysis, AnalyzerError> {
    DEFAULT_ANALYZER.analyze_file(file_path.as_ref())
}

/// Command-line application functionality
pub mod app {
    use crate::core::analyzer::{TextAnalysis, TextAnalyzer};
    use log::error;
    use rayon::prelude::*;
    use std::path::{Path, PathBuf};

    /// Run the analyzer on multiple files in parallel
    ///
    /// # Arguments
    ///
    /// * `file_paths` - Paths to files to analyze
    /// * `analyzer` - Shared analyzer
    /// * `on_done` - Called once per finished file, e.g. to advance a progress bar
    ///
    /// # Returns
    ///
    /// One entry per file in input order. Failures are logged and kept as errors
    /// so the remaining files are still analyzed.
    pub fn run_analyzer<F>(
        file_paths: &[PathBuf],
        analyzer: &TextAnalyzer,
        on_done: F,
    ) -> Vec<(PathBuf, anyhow::Result<TextAnalysis>)>
    where
        F: Fn(&Path) + Sync,
    {
        file_paths
            .par_iter()
            .map(|file_path| {
                let result = analyzer.analyze_file(file_path).map_err(|e| {
                    error!("Error analyzing {}: {}", file_path.display(), e);
                    anyhow::Error::new(e)
                });
                on_done(file_path);
                (file_path.clone(), result)
            })
            .collect()
    }
}
