/// Core text analyzer implementation
///
/// This file contains the TextAnalyzer which runs the basic counter and every
/// configured vocabulary over a piece of text.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::counter::{count_basics, BasicCounts};
use crate::core::error::{AnalyzerError, Result};
use crate::core::vocabulary::{count_vocabulary, FrequencyTable, Vocabulary};
use crate::utils::file_utils::read_text_file;

/// Frequency table for one vocabulary together with its labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyCounts {
    pub name: String,
    pub title: String,
    pub counts: FrequencyTable,
}

/// Complete result of analyzing one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub basic: BasicCounts,
    pub vocabularies: Vec<VocabularyCounts>,
}

impl TextAnalysis {
    /// Look up the table for a vocabulary by name
    pub fn vocabulary(&self, name: &str) -> Option<&FrequencyTable> {
        self.vocabularies
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.counts)
    }
}

/// Core text analyzer structure
///
/// Holds the configured vocabularies. It has no per-call state, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    /// Vocabularies in reporting order
    vocabularies: Vec<Vocabulary>,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer instance
    ///
    /// # Arguments
    ///
    /// * `vocabularies` - Vocabularies to tally, in reporting order
    ///
    /// # Returns
    ///
    /// A new TextAnalyzer, or an error if two vocabularies share a name
    pub fn new(vocabularies: Vec<Vocabulary>) -> Result<Self> {
        for (i, vocabulary) in vocabularies.iter().enumerate() {
            if vocabularies[..i].iter().any(|v| v.name() == vocabulary.name()) {
                return Err(AnalyzerError::DuplicateVocabulary {
                    name: vocabulary.name().to_string(),
                });
            }
        }

        Ok(Self { vocabularies })
    }

    pub fn vocabularies(&self) -> &[Vocabulary] {
        &self.vocabularies
    }

    /// Analyze a piece of text.
    ///
    /// Never fails: empty input simply produces zero counts.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let start_time = Instant::now();

        let basic = count_basics(text);
        let vocabularies = self
            .vocabularies
            .iter()
            .map(|vocabulary| VocabularyCounts {
                name: vocabulary.name().to_string(),
                title: vocabulary.title().to_string(),
                counts: count_vocabulary(text, vocabulary),
            })
            .collect();

        debug!(
            "Analyzed {} characters ({} words) in {:?}",
            text.len(),
            basic.words,
            start_time.elapsed()
        );

        TextAnalysis { basic, vocabularies }
    }

    /// Analyze user supplied text, rejecting blank input
    ///
    /// # Arguments
    ///
    /// * `text` - Text to analyze
    ///
    /// # Returns
    ///
    /// The analysis, or `AnalyzerError::EmptyInput` if there is nothing to analyze
    pub fn analyze_input(&self, text: &str) -> Result<TextAnalysis> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }
        Ok(self.analyze(text))
    }

    /// Read a file and analyze its contents
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to analyze
    ///
    /// # Returns
    ///
    /// Analysis results for the file
    pub fn analyze_file(&self, file_path: &Path) -> Result<TextAnalysis> {
        info!("Analyzing file: {}", file_path.display());

        let text = read_text_file(file_path).map_err(|source| AnalyzerError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        self.analyze_input(&text)
    }
}

impl Default for TextAnalyzer {
    /// Pronouns, prepositions and indefinite articles
    fn default() -> Self {
        Self {
            vocabularies: vec![
                Vocabulary::pronouns(),
                Vocabulary::prepositions(),
                Vocabulary::articles(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::SAMPLE_TEXT;

    #[test]
    fn test_default_vocabularies() {
        let analyzer = TextAnalyzer::default();
        let names: Vec<_> = analyzer.vocabularies().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["pronouns", "prepositions", "articles"]);
    }

    #[test]
    fn test_analyze_sentence() {
        let analysis = TextAnalyzer::default().analyze("He sat on a mat in an hour.");
        assert_eq!(analysis.basic.words, 8);
        assert_eq!(analysis.vocabulary("pronouns").unwrap().get("he"), Some(1));
        assert_eq!(analysis.vocabulary("prepositions").unwrap().total(), 2);
        assert_eq!(analysis.vocabulary("articles").unwrap().get("a"), Some(1));
        assert_eq!(analysis.vocabulary("articles").unwrap().get("an"), Some(1));
        assert!(analysis.vocabulary("nouns").is_none());
    }

    #[test]
    fn test_empty_input() {
        let analyzer = TextAnalyzer::default();
        assert!(matches!(analyzer.analyze_input(" \n\t"), Err(AnalyzerError::EmptyInput)));

        let analysis = analyzer.analyze("");
        assert_eq!(analysis.basic, BasicCounts::default());
        assert!(analysis.vocabularies.iter().all(|v| v.counts.total() == 0));
    }

    #[test]
    fn test_matches_never_exceed_words() {
        let analysis = TextAnalyzer::default().analyze(SAMPLE_TEXT);
        assert!(analysis.basic.words > 0);
        for vocabulary in &analysis.vocabularies {
            assert!(vocabulary.counts.total() <= analysis.basic.words);
            assert!(vocabulary.counts.total() > 0, "{} found nothing", vocabulary.name);
        }
    }

    #[test]
    fn test_duplicate_vocabulary_names() {
        let result = TextAnalyzer::new(vec![Vocabulary::articles(), Vocabulary::articles()]);
        assert!(matches!(result, Err(AnalyzerError::DuplicateVocabulary { .. })));
    }

    #[test]
    fn test_custom_vocabulary() {
        let colours = Vocabulary::new("colours", "Colours", &["red", "blue"]).unwrap();
        let analyzer = TextAnalyzer::new(vec![colours]).unwrap();
        let analysis = analyzer.analyze("Red sky, blue sea, redder sun");
        assert_eq!(analysis.vocabularies.len(), 1);
        assert_eq!(analysis.vocabulary("colours").unwrap().get("red"), Some(1));
        assert_eq!(analysis.vocabulary("colours").unwrap().get("blue"), Some(1));
    }
}
