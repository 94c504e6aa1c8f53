//! Mask index: the implicit ladder graph
//!
//! Inverts every corpus word's wildcard masks into `mask -> words`. Two words
//! are neighbors iff they sit in the same bucket, so building the graph costs
//! O(corpus × word length) instead of a pairwise comparison.
//!
//! Words and masks are interned as dense ids; buckets and per-word mask lists
//! hold ids. The index is immutable once built and can be shared across
//! threads by reference.

use crate::core::{Mask, Word};
use rustc_hash::FxHashMap;

/// Inverted wildcard index over one corpus
#[derive(Debug, Clone, Default)]
pub struct MaskIndex {
    /// Corpus words in first-seen order, duplicates dropped
    words: Vec<Word>,
    word_ids: FxHashMap<Word, usize>,
    masks: Vec<Mask>,
    mask_ids: FxHashMap<Mask, usize>,
    /// Words under each mask, in corpus order
    buckets: Vec<Vec<usize>>,
    /// Masks of each word, in position order
    word_masks: Vec<Vec<usize>>,
}

impl MaskIndex {
    /// Build the index for a corpus
    ///
    /// The caller guarantees uniform length; mixed lengths simply produce
    /// disjoint components. Duplicate words collapse to their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Mask, Word};
    /// use word_ladder::index::MaskIndex;
    /// use word_ladder::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["hope", "mope", "pope", "pipe"]);
    /// let index = MaskIndex::build(&corpus);
    ///
    /// let mask = Mask::at(&Word::new("hope").unwrap(), 0);
    /// let bucket: Vec<&str> = index.bucket(&mask).map(Word::text).collect();
    /// assert_eq!(bucket, ["hope", "mope", "pope"]);
    /// ```
    #[must_use]
    pub fn build(corpus: &[Word]) -> Self {
        let mut index = Self::default();

        for word in corpus {
            if index.word_ids.contains_key(word) {
                continue;
            }

            let word_id = index.words.len();
            index.words.push(word.clone());
            index.word_ids.insert(word.clone(), word_id);

            let mut own_masks = Vec::with_capacity(word.len());
            for mask in Mask::derive_all(word) {
                let mask_id = index.intern_mask(mask);
                index.buckets[mask_id].push(word_id);
                own_masks.push(mask_id);
            }
            index.word_masks.push(own_masks);
        }

        log::debug!(
            "built mask index: {} words, {} masks",
            index.words.len(),
            index.masks.len()
        );

        index
    }

    fn intern_mask(&mut self, mask: Mask) -> usize {
        if let Some(&id) = self.mask_ids.get(&mask) {
            return id;
        }

        let id = self.masks.len();
        self.mask_ids.insert(mask.clone(), id);
        self.masks.push(mask);
        self.buckets.push(Vec::new());
        id
    }

    /// Number of distinct words indexed
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

    /// Number of distinct masks
    #[inline]
    #[must_use]
    pub fn mask_count(&self) -> usize {
        self.masks.len()
    }

    /// Length of the indexed words, taken from the first word
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.words.first().map(Word::len)
    }

    /// Indexed words in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether a word was part of the indexed corpus
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_ids.contains_key(word)
    }

    /// Look up the indexed copy of a word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.id_of(word).map(|id| &self.words[id])
    }

    /// Words filed under a mask, in corpus order
    pub fn bucket(&self, mask: &Mask) -> impl Iterator<Item = &Word> + '_ {
        self.mask_ids
            .get(mask)
            .map_or(&[][..], |&id| self.buckets[id].as_slice())
            .iter()
            .map(|&id| &self.words[id])
    }

    /// Distinct masks in first-seen order
    #[must_use]
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Mask with the most words, first one on ties
    #[must_use]
    pub fn largest_bucket(&self) -> Option<(&Mask, usize)> {
        self.masks
            .iter()
            .zip(&self.buckets)
            .map(|(mask, bucket)| (mask, bucket.len()))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }

    /// Distinct neighbors of a word
    ///
    /// Ordered by the word's mask positions, then bucket order. Returns an
    /// empty list for words outside the corpus.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<&Word> {
        self.id_of(word)
            .map(|id| self.neighbor_ids(id).map(|n| &self.words[n]).collect())
            .unwrap_or_default()
    }

    /// Check whether two corpus words share a bucket
    #[must_use]
    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(a), Some(b)) if a != b => self.word_masks[a]
                .iter()
                .any(|&mask_id| self.buckets[mask_id].contains(&b)),
            _ => false,
        }
    }

    pub(crate) fn id_of(&self, word: &str) -> Option<usize> {
        self.word_ids.get(word).copied()
    }

    pub(crate) fn word(&self, id: usize) -> &Word {
        &self.words[id]
    }

    /// Neighbor ids of a word id
    ///
    /// Two distinct equal-length words share at most one mask, so no
    /// neighbor is produced twice.
    pub(crate) fn neighbor_ids(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.word_masks[id]
            .iter()
            .flat_map(move |&mask_id| self.buckets[mask_id].iter().copied())
            .filter(move |&n| n != id)
    }
}
