//! Breadth-first ladder search over a mask index

use super::config::SearchConfig;
use super::frontier::{Frontier, Path};
use super::state::{SearchOutcome, SearchState, SearchStats};
use crate::core::Ladder;
use crate::index::MaskIndex;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    /// Stop at the first ladder reaching the target
    First,
    /// Drain the layer of the first hit and collect every ladder in it
    AllShortest,
}

/// Ladder search bound to one index
///
/// Holds no per-query state; every call builds a fresh frontier, so one
/// searcher (and one index) can serve many queries, also from several threads.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    index: &'a MaskIndex,
    config: SearchConfig,
}

impl<'a> LadderSearch<'a> {
    /// Create a searcher with the default configuration
    #[must_use]
    pub const fn new(index: &'a MaskIndex) -> Self {
        Self::with_config(index, SearchConfig::new())
    }

    #[must_use]
    pub const fn with_config(index: &'a MaskIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    #[must_use]
    pub const fn index(&self) -> &'a MaskIndex {
        self.index
    }

    /// Ladder with the fewest rungs from `start` to `target`
    ///
    /// Returns the empty ladder when either word is outside the corpus, when
    /// they are equal, or when no ladder fits within the rung cap.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::index::MaskIndex;
    /// use word_ladder::search::LadderSearch;
    /// use word_ladder::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["hope", "mope", "nope", "pipe", "pole", "pope", "rope"]);
    /// let index = MaskIndex::build(&corpus);
    /// let search = LadderSearch::new(&index);
    ///
    /// assert_eq!(search.shortest_ladder("hope", "rope").to_string(), "hope -> rope");
    /// assert!(search.shortest_ladder("hope", "hope").is_empty());
    /// ```
    #[must_use]
    pub fn shortest_ladder(&self, start: &str, target: &str) -> Ladder {
        self.search_shortest(start, target).result
    }

    /// Every ladder tied for fewest rungs from `start` to `target`
    ///
    /// Same empty-result rules as [`LadderSearch::shortest_ladder`].
    #[must_use]
    pub fn all_shortest_ladders(&self, start: &str, target: &str) -> BTreeSet<Ladder> {
        self.search_all(start, target).result
    }

    /// [`LadderSearch::shortest_ladder`] with final state and counters
    #[must_use]
    pub fn search_shortest(&self, start: &str, target: &str) -> SearchOutcome<Ladder> {
        let Some((start_id, target_id)) = self.endpoints(start, target) else {
            return SearchOutcome::rejected(Ladder::empty());
        };

        let run = self.traverse(start_id, target_id, Goal::First);
        SearchOutcome {
            result: run.ladders.into_iter().next().unwrap_or_default(),
            state: run.state,
            stats: run.stats,
        }
    }

    /// [`LadderSearch::all_shortest_ladders`] with final state and counters
    #[must_use]
    pub fn search_all(&self, start: &str, target: &str) -> SearchOutcome<BTreeSet<Ladder>> {
        let Some((start_id, target_id)) = self.endpoints(start, target) else {
            return SearchOutcome::rejected(BTreeSet::new());
        };

        let run = self.traverse(start_id, target_id, Goal::AllShortest);
        SearchOutcome {
            result: run.ladders.into_iter().collect(),
            state: run.state,
            stats: run.stats,
        }
    }

    /// Resolve query words to ids, or `None` if the query has no answer
    fn endpoints(&self, start: &str, target: &str) -> Option<(usize, usize)> {
        let start = start.to_ascii_lowercase();
        let target = target.to_ascii_lowercase();

        let start_id = self.index.id_of(&start);
        let target_id = self.index.id_of(&target);

        match (start_id, target_id) {
            (Some(s), Some(t)) if s != t => Some((s, t)),
            (Some(_), Some(_)) => {
                log::debug!("ladder query {start} -> {target}: start equals target");
                None
            }
            _ => {
                log::debug!("ladder query {start} -> {target}: word not in corpus");
                None
            }
        }
    }

    fn traverse(&self, start: usize, target: usize, goal: Goal) -> Traversal {
        let max_rungs = self.config.max_rungs;
        let mut frontier = Frontier::new(start, self.config.prune_settled);
        let mut stats = SearchStats::default();
        let mut ladders: Vec<Path> = Vec::new();
        let mut shortest: Option<usize> = None;

        'search: while let Some(path) = frontier.pop() {
            let rungs = path.len() + 1;

            // Frontier lengths never decrease, so the first path past a bound
            // means every remaining path is past it too.
            if shortest.is_some_and(|s| rungs > s) {
                break;
            }
            if rungs > max_rungs {
                stats.cap_reached = true;
                break;
            }

            stats.paths_expanded += 1;
            let last = *path.last().expect("frontier paths are never empty");

            for next in self.index.neighbor_ids(last) {
                if !frontier.admits(&path, next) {
                    continue;
                }

                let mut extended = path.clone();
                extended.push(next);

                if next == target {
                    shortest.get_or_insert(rungs);
                    ladders.push(extended);
                    if goal == Goal::First {
                        break 'search;
                    }
                } else {
                    frontier.push(extended);
                }
            }
        }

        let state = if ladders.is_empty() {
            SearchState::Exhausted
        } else {
            SearchState::Found
        };
        stats.peak_frontier = frontier.peak();

        let start_word = self.index.word(start);
        let target_word = self.index.word(target);
        if stats.cap_reached && ladders.is_empty() {
            log::warn!(
                "ladder search {start_word} -> {target_word} stopped at the {max_rungs} rung cap; \
                 longer ladders are reported as no path"
            );
        }
        log::debug!(
            "ladder search {start_word} -> {target_word} ({goal:?}): {} after {} expansions, \
             {} ladders, peak frontier {}",
            state.name(),
            stats.paths_expanded,
            ladders.len(),
            stats.peak_frontier
        );

        Traversal {
            ladders: ladders.into_iter().map(|p| self.to_ladder(&p)).collect(),
            state,
            stats,
        }
    }

    fn to_ladder(&self, path: &[usize]) -> Ladder {
        path.iter()
            .map(|&id| self.index.word(id).clone())
            .collect::<Vec<_>>()
            .into()
    }
}

struct Traversal {
    ladders: Vec<Ladder>,
    state: SearchState,
    stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    const POPE_FAMILY: &[&str] = &["hope", "mope", "nope", "pipe", "pole", "pope", "rope"];

    fn ladder(words: &[&str]) -> Ladder {
        words_from_slice(words).into()
    }

    fn index_of(words: &[&str]) -> MaskIndex {
        MaskIndex::build(&words_from_slice(words))
    }

    #[test]
    fn shortest_direct_neighbor() {
        let index = index_of(POPE_FAMILY);
        let search = LadderSearch::new(&index);
        assert_eq!(
            search.shortest_ladder("hope", "rope"),
            ladder(&["hope", "rope"])
        );
    }

    #[test]
    fn shortest_multi_step() {
        let index = index_of(POPE_FAMILY);
        let search = LadderSearch::new(&index);
        assert_eq!(
            search.shortest_ladder("hope", "pipe"),
            ladder(&["hope", "pope", "pipe"])
        );
        assert_eq!(
            search.shortest_ladder("pipe", "pole"),
            ladder(&["pipe", "pope", "pole"])
        );
    }

    #[test]
    fn self_query_is_empty() {
        let index = index_of(&["cat", "cot"]);
        let search = LadderSearch::new(&index);
        assert!(search.shortest_ladder("cat", "cat").is_empty());
        assert!(search.all_shortest_ladders("cat", "cat").is_empty());
    }

    #[test]
    fn disconnected_pair_is_empty() {
        let index = index_of(&["cat", "dog"]);
        let search = LadderSearch::new(&index);
        let outcome = search.search_shortest("cat", "dog");
        assert!(outcome.result.is_empty());
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert!(!outcome.stats.cap_reached);
    }

    #[test]
    fn unknown_words_are_empty() {
        let index = index_of(POPE_FAMILY);
        let search = LadderSearch::new(&index);
        assert!(search.shortest_ladder("hope", "zzzz").is_empty());
        assert!(search.shortest_ladder("zzzz", "hope").is_empty());
        assert!(search.all_shortest_ladders("hope", "zzzz").is_empty());
    }

    #[test]
    fn query_words_are_case_insensitive() {
        let index = index_of(POPE_FAMILY);
        let search = LadderSearch::new(&index);
        assert_eq!(
            search.shortest_ladder("HOPE", "Rope"),
            ladder(&["hope", "rope"])
        );
    }

    #[test]
    fn all_shortest_collects_every_tie() {
        let index = index_of(&["hope", "hose", "rose", "rope"]);
        let search = LadderSearch::new(&index);

        let expected: BTreeSet<Ladder> = [
            ladder(&["hope", "hose", "rose"]),
            ladder(&["hope", "rope", "rose"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(search.all_shortest_ladders("hope", "rose"), expected);
    }

    #[test]
    fn all_shortest_excludes_longer_routes() {
        // cat-cot-dot-dog (4) vs cat-cot-cog-dog (4) vs cat-bat-bot-dot-dog (5)
        let index = index_of(&["cat", "cot", "cog", "dog", "dot", "bat", "bot"]);
        let search = LadderSearch::new(&index);

        let all = search.all_shortest_ladders("cat", "dog");
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|l| l.len() == 4));
        assert!(all.contains(&search.shortest_ladder("cat", "dog")));
    }

    #[test]
    fn rung_cap_turns_long_ladders_into_no_path() {
        let index = index_of(&["cat", "cot", "cog", "dog"]);

        let capped = LadderSearch::with_config(&index, SearchConfig::new().with_max_rungs(3));
        let outcome = capped.search_shortest("cat", "dog");
        assert!(outcome.result.is_empty());
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert!(outcome.stats.cap_reached);
        assert!(capped.all_shortest_ladders("cat", "dog").is_empty());

        let exact = LadderSearch::with_config(&index, SearchConfig::new().with_max_rungs(4));
        assert_eq!(
            exact.shortest_ladder("cat", "dog"),
            ladder(&["cat", "cot", "cog", "dog"])
        );
    }

    #[test]
    fn found_state_reported() {
        let index = index_of(POPE_FAMILY);
        let search = LadderSearch::new(&index);
        let outcome = search.search_all("hope", "pipe");
        assert!(outcome.is_found());
        assert!(outcome.stats.paths_expanded > 0);
        assert!(outcome.stats.peak_frontier >= 1);
    }

    #[test]
    fn pruning_does_not_change_results() {
        let words = &[
            "cat", "cot", "cog", "dog", "dot", "bat", "bot", "bog", "cab", "cob", "dob",
        ];
        let index = index_of(words);
        let pruned = LadderSearch::new(&index);
        let plain = LadderSearch::with_config(&index, SearchConfig::new().with_pruning(false));

        for start in words {
            for target in words {
                assert_eq!(
                    pruned.shortest_ladder(start, target),
                    plain.shortest_ladder(start, target),
                    "{start} -> {target}"
                );
                assert_eq!(
                    pruned.all_shortest_ladders(start, target),
                    plain.all_shortest_ladders(start, target),
                    "{start} -> {target}"
                );
            }
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let index = index_of(&["hope", "hose", "rose", "rope", "pope", "pose"]);
        let search = LadderSearch::new(&index);
        assert_eq!(
            search.shortest_ladder("hope", "rose"),
            search.shortest_ladder("hope", "rose")
        );
        assert_eq!(
            search.all_shortest_ladders("pope", "rose"),
            search.all_shortest_ladders("pope", "rose")
        );
    }

    #[test]
    fn shortest_follows_mask_then_bucket_order() {
        // hope's masks in order: *ope, h*pe, ho*e, hop*; rope is reached via *ope first
        let index = index_of(&["hope", "hose", "rose", "rope"]);
        let search = LadderSearch::new(&index);
        assert_eq!(
            search.shortest_ladder("hope", "rose"),
            ladder(&["hope", "rope", "rose"])
        );
    }

    #[test]
    fn returned_ladders_are_valid() {
        let index = index_of(&["cat", "cot", "cog", "dog", "dot", "bat", "bot"]);
        let search = LadderSearch::new(&index);
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();

        assert!(search.shortest_ladder("cat", "dog").connects(&cat, &dog));
        for l in search.all_shortest_ladders("cat", "dog") {
            assert!(l.connects(&cat, &dog));
        }
    }
}
