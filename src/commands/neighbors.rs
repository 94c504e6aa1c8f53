//! Neighbor inspection command
//!
//! Lists the one-letter neighbors of a word and summarizes the index built
//! for the word's length.

use crate::core::{Mask, Word};
use crate::index::MaskIndex;
use crate::wordlists::loader::filter_by_length;

/// Result of inspecting a word
pub struct NeighborReport {
    pub word: Word,
    /// Neighbors with the letter position they differ in
    pub neighbors: Vec<(Word, usize)>,
    pub corpus_size: usize,
    pub mask_count: usize,
    pub largest_bucket: Option<(Mask, usize)>,
}

impl NeighborReport {
    /// Neighbor count per letter position
    #[must_use]
    pub fn by_position(&self) -> Vec<usize> {
        let mut counts = vec![0; self.word.len()];
        for &(_, position) in &self.neighbors {
            counts[position] += 1;
        }
        counts
    }
}

/// Find the neighbors of a word within a word list
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty or not ASCII letters)
/// - The word is not in the word list
pub fn word_neighbors(word: &str, words: &[Word]) -> Result<NeighborReport, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let corpus = filter_by_length(words, word.len());
    let index = MaskIndex::build(&corpus);

    if !index.contains(word.text()) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let neighbors = index
        .neighbors(word.text())
        .into_iter()
        .filter_map(|n| word.differing_position(n).map(|pos| (n.clone(), pos)))
        .collect();

    Ok(NeighborReport {
        neighbors,
        corpus_size: index.len(),
        mask_count: index.mask_count(),
        largest_bucket: index
            .largest_bucket()
            .map(|(mask, size)| (mask.clone(), size)),
        word,
    })
}
