//! Ladder word representation
//!
//! A Word is a non-empty lowercase ASCII string. All words in one ladder
//! problem share a length, but the type itself does not fix it.

use std::borrow::Borrow;
use std::fmt;

/// A lowercase word usable as a ladder rung
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Hope").unwrap();
    /// assert_eq!(word.text(), "hope");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h0pe").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Position of the single differing letter, if `other` is exactly one
    /// substitution away
    ///
    /// Returns `None` for words of different length, identical words, or
    /// words differing in more than one position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let hope = Word::new("hope").unwrap();
    /// assert_eq!(hope.differing_position(&Word::new("rope").unwrap()), Some(0));
    /// assert_eq!(hope.differing_position(&Word::new("rose").unwrap()), None);
    /// ```
    #[must_use]
    pub fn differing_position(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        let mut diffs = self
            .chars()
            .iter()
            .zip(other.chars())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (diffs.next(), diffs.next()) {
            (Some(position), None) => Some(position),
            _ => None,
        }
    }

    /// Check whether `other` is one substitution away
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.differing_position(other).is_some()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Lets maps keyed by `Word` be queried with `&str`; hashing matches `String`.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
