/// Analyzer configuration
///
/// Vocabularies are configuration values, loaded from an optional JSON file
/// and turned into a `TextAnalyzer`.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::analyzer::TextAnalyzer;
use crate::core::error::{AnalyzerError, Result};
use crate::core::vocabulary::{Vocabulary, ARTICLES, PREPOSITIONS, PRONOUNS};

/// One configured word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Key used in exported results.
    pub name: String,

    /// Display title, plural (e.g. "Pronouns").
    pub title: String,

    /// Words, matched case-insensitively.
    pub words: Vec<String>,
}

/// Top-level configuration file.
///
/// Without `vocabularies` (or with an empty list) the built-in lists are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Configured vocabularies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabularies: Option<Vec<VocabularyConfig>>,

    /// Append `vocabularies` to the built-in lists instead of replacing them.
    pub extend_defaults: bool,
}

/// The built-in pronoun, preposition and indefinite article lists.
pub fn default_vocabularies() -> Vec<VocabularyConfig> {
    let entry = |name: &str, title: &str, words: &[&str]| VocabularyConfig {
        name: name.to_string(),
        title: title.to_string(),
        words: words.iter().map(|w| w.to_string()).collect(),
    };
    vec![
        entry("pronouns", "Pronouns", PRONOUNS),
        entry("prepositions", "Prepositions", PREPOSITIONS),
        entry("articles", "Indefinite Articles", ARTICLES),
    ]
}

impl AnalyzerConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnalyzerError::Config {
            message: format!("invalid JSON: {}", e),
        })
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnalyzerError::Config {
                message: format!("configuration file not found: {}", path.display()),
            });
        }
        let json = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Vocabularies in effect, defaults first when extending.
    pub fn effective_vocabularies(&self) -> Vec<VocabularyConfig> {
        let configured = self.vocabularies.as_deref().unwrap_or_default();
        if self.extend_defaults || configured.is_empty() {
            let mut all = default_vocabularies();
            all.extend(configured.iter().cloned());
            all
        } else {
            configured.to_vec()
        }
    }

    /// Compile every vocabulary and build the analyzer.
    pub fn build_analyzer(&self) -> Result<TextAnalyzer> {
        let vocabularies = self
            .effective_vocabularies()
            .iter()
            .map(|v| Vocabulary::new(&v.name, &v.title, &v.words))
            .collect::<Result<Vec<_>>>()?;
        TextAnalyzer::new(vocabularies)
    }
}
