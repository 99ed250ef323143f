//! Keyword extraction for free-text vibe descriptions.
//!
//! Text is lower-cased, stripped of a fixed punctuation set, split on
//! whitespace, and filtered down to words longer than two characters.
//! Punctuation is removed rather than treated as a separator, so
//! `"late-night"` yields the single token `"latenight"`.
//!
//! # Examples
//! ```
//! use vibe_core::tokenize;
//!
//! assert_eq!(
//!     tokenize("Coffee, Jazz!! & Running"),
//!     vec!["coffee", "jazz", "running"],
//! );
//! ```

use std::collections::HashSet;

/// Tokens must be strictly longer than this many characters to be kept.
pub const MIN_TOKEN_CHARS: usize = 2;

const STRIPPED: [char; 21] = [
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Split `text` into lower-case keywords.
///
/// Order and duplicates are preserved.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// Tokenised vibe text, ready for overlap comparisons.
///
/// # Examples
/// ```
/// use vibe_core::Tokens;
///
/// let mine = Tokens::new("Nightlife Coffee");
/// let theirs = Tokens::new("Nightlife Coffee late-night");
/// assert_eq!(mine.overlap(&theirs), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    words: Vec<String>,
}

impl Tokens {
    /// Tokenise `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            words: tokenize(text),
        }
    }

    /// Number of tokens, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Report whether no keywords survived tokenisation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the tokens in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Count the tokens of `self` that also occur in `other`.
    ///
    /// Membership in `other` is what matters: a token repeated in `self`
    /// counts once per repetition, however often `other` contains it.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> usize {
        let lookup: HashSet<&str> = other.iter().collect();
        self.iter().filter(|word| lookup.contains(word)).count()
    }
}

impl From<Vec<String>> for Tokens {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
