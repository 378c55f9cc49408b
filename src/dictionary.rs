use std::collections::HashSet;
use std::io::BufRead;

use tracing::debug;

use crate::error::Error;

/// Answers whether a string is an accepted word.
///
/// Implementations must be free of side effects and total over arbitrary strings.
/// They are shared between concurrent validations, hence the `Send + Sync` bound.
pub trait Dictionary: Send + Sync {
    /// Whether `word` may be played.
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// A [`Dictionary`] backed by an in-memory set of lowercase words.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Read a word list with one word per line.
    ///
    /// Surrounding whitespace is trimmed and words are lowercased. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }

        debug!(words = words.len(), "loaded word list");
        Ok(Self { words })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(|word| word.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
