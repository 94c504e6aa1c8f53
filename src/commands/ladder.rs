//! Ladder commands
//!
//! Validate a start/target query against a word list, index the words of the
//! query's length, and run one of the two ladder searches.

use crate::core::{Ladder, Word};
use crate::index::MaskIndex;
use crate::search::{LadderSearch, SearchConfig, SearchOutcome};
use crate::wordlists::loader::filter_by_length;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Configuration for a ladder query
pub struct LadderConfig {
    pub start: String,
    pub target: String,
    pub search: SearchConfig,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            search: SearchConfig::new(),
        }
    }
}

/// Result of a ladder query
pub struct LadderResult<T> {
    pub start: Word,
    pub target: Word,
    pub outcome: SearchOutcome<T>,
    pub max_rungs: usize,
    /// Words of the query's length that were indexed
    pub corpus_size: usize,
    pub build_time: Duration,
    pub search_time: Duration,
}

pub type ShortestResult = LadderResult<Ladder>;
pub type AllShortestResult = LadderResult<BTreeSet<Ladder>>;

/// Find the shortest ladder between two words
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (empty or not ASCII letters)
/// - The words have different lengths
/// - Either word is not in the word list
pub fn find_ladder(config: LadderConfig, words: &[Word]) -> Result<ShortestResult, String> {
    run_query(config, words, |search, start, target| {
        search.search_shortest(start.text(), target.text())
    })
}

/// Find every ladder tied for shortest between two words
///
/// # Errors
///
/// Same conditions as [`find_ladder`].
pub fn find_all_ladders(config: LadderConfig, words: &[Word]) -> Result<AllShortestResult, String> {
    run_query(config, words, |search, start, target| {
        search.search_all(start.text(), target.text())
    })
}

fn run_query<T>(
    config: LadderConfig,
    words: &[Word],
    query: impl FnOnce(&LadderSearch<'_>, &Word, &Word) -> SearchOutcome<T>,
) -> Result<LadderResult<T>, String> {
    let start = Word::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if start.len() != target.len() {
        return Err(format!(
            "'{start}' has {} letters but '{target}' has {}",
            start.len(),
            target.len()
        ));
    }

    let corpus = filter_by_length(words, start.len());
    for word in [&start, &target] {
        if !corpus.contains(word) {
            return Err(format!("Word '{word}' not in word list"));
        }
    }

    let build_start = Instant::now();
    let index = MaskIndex::build(&corpus);
    let build_time = build_start.elapsed();

    let search = LadderSearch::with_config(&index, config.search);
    let search_start = Instant::now();
    let outcome = query(&search, &start, &target);
    let search_time = search_start.elapsed();

    Ok(LadderResult {
        start,
        target,
        outcome,
        max_rungs: config.search.max_rungs,
        corpus_size: index.len(),
        build_time,
        search_time,
    })
}
