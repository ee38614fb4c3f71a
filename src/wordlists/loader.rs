//! Word list loading utilities
//!
//! Reads dictionaries from text files, one word per line.

use super::Dictionary;
use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines and entries that are not valid 5-letter words are skipped;
/// duplicates keep their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hardmode::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/sample_words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_word_list(&content);
    debug!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse dictionary text, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} entries that are not 5-letter words");
    }

    Dictionary::new(words)
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_hardmode::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "abc", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
