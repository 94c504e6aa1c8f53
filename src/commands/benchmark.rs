//! Benchmark command
//!
//! Runs shortest-ladder queries for many random word pairs in parallel
//! against one shared index.

use crate::core::Word;
use crate::search::LadderSearch;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub found: usize,
    pub not_found: usize,
    /// Queries the rung cap cut short without an answer
    pub capped: usize,
    pub average_rungs: f64,
    pub min_rungs: usize,
    pub max_rungs: usize,
    /// Rung count -> number of ladders found with it
    pub distribution: BTreeMap<usize, usize>,
    pub paths_expanded: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Draw `count` reproducible start/target pairs
///
/// Each pair uses two different list positions. Returns no pairs for lists
/// with fewer than two words.
#[must_use]
pub fn sample_pairs(words: &[Word], count: usize, seed: u64) -> Vec<(Word, Word)> {
    if words.len() < 2 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let picked = rand::seq::index::sample(&mut rng, words.len(), 2);
            (words[picked.index(0)].clone(), words[picked.index(1)].clone())
        })
        .collect()
}

/// Run shortest-ladder queries for every pair
///
/// Queries run on the rayon pool and share the searcher's index read-only.
///
/// # Panics
/// Will not panic - the progress template is a fixed, valid string.
pub fn run_benchmark(
    search: &LadderSearch<'_>,
    pairs: &[(Word, Word)],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<_> = pairs
        .par_iter()
        .map(|(from, to)| {
            let outcome = search.search_shortest(from.text(), to.text());
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut capped = 0;
    let mut paths_expanded = 0;
    for outcome in &outcomes {
        paths_expanded += outcome.stats.paths_expanded;
        if outcome.result.is_empty() {
            if outcome.stats.cap_reached {
                capped += 1;
            }
        } else {
            *distribution.entry(outcome.result.len()).or_insert(0) += 1;
        }
    }

    let found: usize = distribution.values().sum();
    let total_rungs: usize = distribution.iter().map(|(rungs, n)| rungs * n).sum();
    let total_queries = pairs.len();

    BenchmarkResult {
        total_queries,
        found,
        not_found: total_queries - found,
        capped,
        average_rungs: if found > 0 {
            total_rungs as f64 / found as f64
        } else {
            0.0
        },
        min_rungs: distribution.keys().next().copied().unwrap_or(0),
        max_rungs: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        paths_expanded,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MaskIndex;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::{filter_by_length, words_from_slice};

    fn three_letter_words() -> Vec<Word> {
        filter_by_length(&words_from_slice(WORDS), 3)
    }

    #[test]
    fn sample_pairs_is_reproducible() {
        let words = three_letter_words();
        assert_eq!(sample_pairs(&words, 20, 7), sample_pairs(&words, 20, 7));
    }

    #[test]
    fn sample_pairs_uses_distinct_words() {
        let words = three_letter_words();
        let pairs = sample_pairs(&words, 50, 1);
        assert_eq!(pairs.len(), 50);
        assert!(pairs.iter().all(|(a, b)| a != b));
    }

    #[test]
    fn sample_pairs_needs_two_words() {
        let words = words_from_slice(&["cat"]);
        assert!(sample_pairs(&words, 5, 0).is_empty());
    }

    #[test]
    fn benchmark_runs() {
        let words = three_letter_words();
        let index = MaskIndex::build(&words);
        let search = LadderSearch::new(&index);
        let pairs = sample_pairs(&words, 10, 42);

        let result = run_benchmark(&search, &pairs, false);

        assert_eq!(result.total_queries, 10);
        assert_eq!(result.found + result.not_found, 10);
        assert!(result.capped <= result.not_found);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = three_letter_words();
        let index = MaskIndex::build(&words);
        let search = LadderSearch::new(&index);
        let pairs = sample_pairs(&words, 10, 3);

        let result = run_benchmark(&search, &pairs, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.found);
        for &rungs in result.distribution.keys() {
            assert!((2..=7).contains(&rungs));
        }
    }

    #[test]
    fn benchmark_known_pairs() {
        let words = words_from_slice(&["cat", "cot", "cog", "dog", "eel"]);
        let index = MaskIndex::build(&words);
        let search = LadderSearch::new(&index);
        let pairs = vec![
            (words[0].clone(), words[3].clone()), // 4 rungs
            (words[0].clone(), words[1].clone()), // 2 rungs
            (words[0].clone(), words[4].clone()), // unreachable
        ];

        let result = run_benchmark(&search, &pairs, false);

        assert_eq!(result.found, 2);
        assert_eq!(result.not_found, 1);
        assert_eq!(result.capped, 0);
        assert_eq!(result.min_rungs, 2);
        assert_eq!(result.max_rungs, 4);
        assert!((result.average_rungs - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_empty_pairs() {
        let words = words_from_slice(&["cat"]);
        let index = MaskIndex::build(&words);
        let search = LadderSearch::new(&index);

        let result = run_benchmark(&search, &[], false);

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.found, 0);
        assert_eq!(result.min_rungs, 0);
    }
}
