/// Basic element counting
///
/// Counts letters, words, spaces, newlines and special symbols in a block of text.

use serde::{Deserialize, Serialize};

/// Character and word totals for one piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCounts {
    /// ASCII letters `[a-zA-Z]`
    pub letters: usize,
    /// Whitespace-separated fragments
    pub words: usize,
    /// Literal `' '` characters
    pub spaces: usize,
    /// `'\n'` characters
    pub newlines: usize,
    /// Anything that is not a word character, space or newline
    pub special_symbols: usize,
}

impl BasicCounts {
    /// Rows in display order, paired with their labels
    pub fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("Letters", self.letters),
            ("Words", self.words),
            ("Spaces", self.spaces),
            ("Newlines", self.newlines),
            ("Special Symbols", self.special_symbols),
        ]
    }
}

/// Count the basic elements of `text`.
///
/// Digits and underscores are word characters but not letters, so they land in
/// none of the character buckets. Non-ASCII letters count as special symbols.
///
/// The word count uses Unicode whitespace (tabs, carriage returns and so on),
/// which is a broader notion than the `spaces` and `newlines` buckets.
pub fn count_basics(text: &str) -> BasicCounts {
    let mut counts = BasicCounts::default();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            counts.letters += 1;
        } else if c == ' ' {
            counts.spaces += 1;
        } else if c == '\n' {
            counts.newlines += 1;
        } else if !is_word_char(c) {
            counts.special_symbols += 1;
        }
    }

    counts.words = text.split_whitespace().count();

    counts
}

/// ASCII word character: letter, digit or underscore
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
