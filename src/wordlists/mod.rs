//! Dictionaries for puzzle solving
//!
//! A [`Dictionary`] is the ordered, deduplicated word table every solution
//! space indexes into. Sessions running on different threads share one
//! dictionary by reference.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Default dictionary file, resolved against the working directory
pub const DEFAULT_DICTIONARY_FILE: &str = "english-usa-dictionary.txt";

/// Ordered, deduplicated list of puzzle words
///
/// A word's position in the dictionary is its identity for tie-breaking and
/// for the index-based solution spaces.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any duplicate
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            if !dictionary.index.contains_key(&word) {
                dictionary.index.insert(word, dictionary.words.len());
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    /// Build a dictionary from string literals, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "crane", "toolong"]);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(loader::words_from_slice(words))
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a dictionary index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Dictionary index of a word, if present
    #[inline]
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let dictionary = Dictionary::from_strs(&["slate", "crane", "SLATE", "apple"]);

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "apple"]);
        assert_eq!(dictionary.position(&Word::new("apple").unwrap()), Some(2));
    }

    #[test]
    fn lookup_missing_word() {
        let dictionary = Dictionary::from_strs(&["slate"]);
        let missing = Word::new("crane").unwrap();

        assert!(!dictionary.contains(&missing));
        assert_eq!(dictionary.position(&missing), None);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_strs(&[]);
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }
}
