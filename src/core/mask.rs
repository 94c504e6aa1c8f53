//! Wildcard masks
//!
//! A mask is a word with exactly one letter replaced by [`Mask::PLACEHOLDER`].
//! Two words of equal length are one substitution apart iff they share a mask,
//! which makes masks the grouping key of the adjacency index.
//!
//! ```text
//! cat -> *at, c*t, ca*
//! ```

use super::Word;
use std::fmt;

/// Wildcard pattern derived from a word
///
/// The placeholder is not a lowercase letter, so a mask never collides with a
/// real word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(String);

impl Mask {
    /// Character standing in for the masked letter
    pub const PLACEHOLDER: char = '*';

    /// Mask `word` at `position`
    ///
    /// # Panics
    /// Panics if `position >= word.len()`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Mask, Word};
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(Mask::at(&word, 1).as_str(), "c*t");
    /// ```
    #[must_use]
    pub fn at(word: &Word, position: usize) -> Self {
        let text = word.text();
        assert!(position < text.len(), "mask position out of range");

        let mut masked = String::with_capacity(text.len());
        masked.push_str(&text[..position]);
        masked.push(Self::PLACEHOLDER);
        masked.push_str(&text[position + 1..]);
        Self(masked)
    }

    /// All masks of a word, one per letter position, in position order
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Mask, Word};
    ///
    /// let masks = Mask::derive_all(&Word::new("cat").unwrap());
    /// let texts: Vec<&str> = masks.iter().map(Mask::as_str).collect();
    /// assert_eq!(texts, ["*at", "c*t", "ca*"]);
    /// ```
    #[must_use]
    pub fn derive_all(word: &Word) -> Vec<Self> {
        (0..word.len()).map(|i| Self::at(word, i)).collect()
    }

    /// Position of the placeholder
    ///
    /// # Panics
    /// Will not panic - every constructor inserts exactly one placeholder.
    #[must_use]
    pub fn position(&self) -> usize {
        self.0
            .find(Self::PLACEHOLDER)
            .expect("mask always holds a placeholder")
    }

    /// Check whether `word` fits this mask
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.0.len()
            && self
                .0
                .bytes()
                .zip(word.chars())
                .all(|(m, c)| m == Self::PLACEHOLDER as u8 || m == *c)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
