//! Word ladders
//!
//! A ladder is an ordered sequence of rungs where each consecutive pair
//! differs in exactly one letter position and no word repeats. The empty
//! ladder is the "no answer" value returned by searches.

use super::Word;
use std::fmt;

/// Ordered sequence of words forming a ladder
///
/// Ordering and hashing follow the rung sequence, so ladders can be
/// collected into sets and duplicate paths collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ladder {
    rungs: Vec<Word>,
}

impl Ladder {
    /// The empty ladder ("no path")
    #[must_use]
    pub const fn empty() -> Self {
        Self { rungs: Vec::new() }
    }

    /// Wrap a rung sequence without checking it
    ///
    /// Use [`Ladder::is_valid`] to check ladders built from outside input.
    #[must_use]
    pub const fn from_rungs(rungs: Vec<Word>) -> Self {
        Self { rungs }
    }

    /// Rung count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    #[must_use]
    pub fn rungs(&self) -> &[Word] {
        &self.rungs
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.rungs.first()
    }

    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.rungs.last()
    }

    /// Position changed at each step, one entry per consecutive pair
    ///
    /// `None` marks a step that is not a single substitution.
    #[must_use]
    pub fn steps(&self) -> Vec<Option<usize>> {
        self.rungs
            .windows(2)
            .map(|pair| pair[0].differing_position(&pair[1]))
            .collect()
    }

    /// Check the ladder invariants
    ///
    /// Non-empty, every step a single substitution, and no repeated word.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Ladder, Word};
    ///
    /// let words = ["hope", "hose", "rose"].map(|w| Word::new(w).unwrap());
    /// assert!(Ladder::from_rungs(words.to_vec()).is_valid());
    ///
    /// let words = ["hope", "rose"].map(|w| Word::new(w).unwrap());
    /// assert!(!Ladder::from_rungs(words.to_vec()).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.rungs.is_empty() {
            return false;
        }

        let mut seen = rustc_hash::FxHashSet::default();
        self.rungs.iter().all(|w| seen.insert(w)) && self.steps().iter().all(Option::is_some)
    }

    /// Check the ladder invariants and that it runs from `start` to `target`
    #[must_use]
    pub fn connects(&self, start: &Word, target: &Word) -> bool {
        self.is_valid() && self.start() == Some(start) && self.target() == Some(target)
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.rungs.iter()
    }
}

impl From<Vec<Word>> for Ladder {
    fn from(rungs: Vec<Word>) -> Self {
        Self::from_rungs(rungs)
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.rungs.iter()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rung) in self.rungs.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{rung}")?;
        }
        Ok(())
    }
}
