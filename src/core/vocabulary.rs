/// Closed-class vocabularies and the whole-word frequency counter
///
/// A vocabulary is a fixed, ordered list of lower-case words. It is compiled
/// once into a single case-insensitive whole-word matcher and then used to
/// tally occurrences in any number of texts.

use std::collections::HashMap;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::{AnalyzerError, Result};

/// Built-in pronoun list
pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself",
    "she", "her", "hers", "herself",
    "it", "its", "itself",
    "we", "us", "our", "ours", "ourselves",
    "they", "them", "their", "theirs", "themselves",
    "who", "whom", "whose", "which", "that",
    "this", "these", "those",
];

/// Built-in preposition list
pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
    "concerning", "considering",
    "despite", "down", "during",
    "except",
    "for", "from",
    "in", "inside", "into",
    "like",
    "near",
    "of", "off", "on", "onto", "out", "outside", "over",
    "past", "per",
    "regarding",
    "since",
    "through", "throughout", "to", "toward", "towards",
    "under", "underneath", "until", "unto", "up", "upon",
    "with", "within", "without",
];

/// Built-in indefinite article list
pub const ARTICLES: &[&str] = &["a", "an"];

/// A named, ordered set of words with its compiled matcher
#[derive(Debug, Clone)]
pub struct Vocabulary {
    name: String,
    title: String,
    words: Vec<String>,
    index: HashMap<String, usize>,
    matcher: Option<Regex>,
}

impl Vocabulary {
    /// Build a vocabulary from a word list.
    ///
    /// Words are lower-cased. Duplicates (after lower-casing), empty entries and
    /// entries containing whitespace are rejected.
    pub fn new<S: AsRef<str>>(name: &str, title: &str, words: &[S]) -> Result<Self> {
        let mut normalized = Vec::with_capacity(words.len());
        let mut index = HashMap::with_capacity(words.len());

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(AnalyzerError::InvalidWord {
                    vocabulary: name.to_string(),
                    word,
                });
            }
            if index.contains_key(&word) {
                return Err(AnalyzerError::DuplicateWord {
                    vocabulary: name.to_string(),
                    word,
                });
            }
            index.insert(word.clone(), normalized.len());
            normalized.push(word);
        }

        let matcher = if normalized.is_empty() {
            None
        } else {
            let pattern = build_pattern(&normalized);
            let regex = compile_pattern(&pattern).map_err(|source| AnalyzerError::Pattern {
                vocabulary: name.to_string(),
                source,
            })?;
            Some(regex)
        };

        debug!("Built vocabulary '{}' with {} words", name, normalized.len());

        Ok(Self {
            name: name.to_string(),
            title: title.to_string(),
            words: normalized,
            index,
            matcher,
        })
    }

    pub fn pronouns() -> Self {
        Self::builtin("pronouns", "Pronouns", PRONOUNS)
    }

    pub fn prepositions() -> Self {
        Self::builtin("prepositions", "Prepositions", PREPOSITIONS)
    }

    pub fn articles() -> Self {
        Self::builtin("articles", "Indefinite Articles", ARTICLES)
    }

    // The built-in lists are lower-case and duplicate free; see the tests below.
    fn builtin(name: &str, title: &str, words: &[&str]) -> Self {
        match Self::new(name, title, words) {
            Ok(vocabulary) => vocabulary,
            Err(e) => unreachable!("built-in vocabulary is invalid: {}", e),
        }
    }

    /// Machine name, used as the key in exported results
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable title, e.g. "Indefinite Articles"
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Occurrence count of one vocabulary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Per-word counts for one vocabulary, in vocabulary order
///
/// Every vocabulary word has an entry, including words that never matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    fn zeroed(words: &[String]) -> Self {
        Self {
            entries: words
                .iter()
                .map(|word| FrequencyEntry { word: word.clone(), count: 0 })
                .collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Entries with a non-zero count, highest count first.
    ///
    /// The sort is stable, so ties keep vocabulary order.
    pub fn non_zero_sorted(&self) -> Vec<&FrequencyEntry> {
        let mut found: Vec<_> = self.entries.iter().filter(|entry| entry.count > 0).collect();
        found.sort_by(|a, b| b.count.cmp(&a.count));
        found
    }
}

/// Count whole-word, case-insensitive occurrences of each vocabulary word in `text`.
pub fn count_vocabulary(text: &str, vocabulary: &Vocabulary) -> FrequencyTable {
    let mut table = FrequencyTable::zeroed(&vocabulary.words);

    let Some(matcher) = &vocabulary.matcher else {
        return table;
    };

    for found in matcher.find_iter(text) {
        let word = found.as_str().to_lowercase();
        // Unicode case folding can match surface forms whose lower-case is not
        // the canonical word; those are skipped.
        if let Some(&position) = vocabulary.index.get(&word) {
            table.entries[position].count += 1;
        }
    }

    table
}

/// Alternation of the escaped words between ASCII word boundaries
fn build_pattern(words: &[String]) -> String {
    let alternatives: Vec<String> = words.iter().map(|word| regex::escape(word)).collect();
    format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", alternatives.join("|"))
}

/// Compile a vocabulary pattern, logging the failure
fn compile_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(pattern).map_err(|e| {
        log::error!("Error compiling pattern: {}", e);
        e
    })
}
