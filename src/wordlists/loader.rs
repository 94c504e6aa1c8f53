//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and to cut a corpus down to one word length.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and invalid entries are
/// skipped; words are lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep the words of one length, dropping repeats
///
/// Order is preserved; the first occurrence of a repeated word wins.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::{filter_by_length, words_from_slice};
///
/// let corpus = words_from_slice(&["cat", "dog", "tiger", "giraffe", "eel", "bird", "cat"]);
/// let three: Vec<String> = filter_by_length(&corpus, 3)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(three, ["cat", "dog", "eel"]);
/// ```
#[must_use]
pub fn filter_by_length(words: &[Word], length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .filter(|w| w.len() == length && seen.insert(*w))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["hope", "Rope", "cat"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "hope");
        assert_eq!(words[1].text(), "rope");
        assert_eq!(words[2].text(), "cat");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["hope", "two words", "", "r0pe", "rope"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "hope");
        assert_eq!(words[1].text(), "rope");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn words_from_lines_skips_blanks_and_comments() {
        let words = words_from_lines("# header\nhope\n\n  ROPE  \nbad-word\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["hope", "rope"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn filter_by_length_keeps_matching_words() {
        let corpus = words_from_slice(&["cat", "dog", "tiger", "giraffe", "eel", "bird"]);
        let three = filter_by_length(&corpus, 3);
        let texts: Vec<&str> = three.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "dog", "eel"]);
    }

    #[test]
    fn filter_by_length_drops_repeats() {
        let corpus = words_from_slice(&["cat", "CAT", "bat", "cat"]);
        assert_eq!(filter_by_length(&corpus, 3).len(), 2);
    }

    #[test]
    fn filter_by_length_no_match() {
        let corpus = words_from_slice(&["cat", "dog"]);
        assert!(filter_by_length(&corpus, 5).is_empty());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
