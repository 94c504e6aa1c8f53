//! Breadth-first frontier of partial ladders
//!
//! Entries are full paths of word ids, so each path is its own visited set:
//! a word may appear on several branches but never twice on one path.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub(super) type Path = Vec<usize>;

pub(super) struct Frontier {
    queue: VecDeque<Path>,
    /// Rung count at which each word was first reached
    settled: FxHashMap<usize, usize>,
    prune_settled: bool,
    peak: usize,
}

impl Frontier {
    pub(super) fn new(start: usize, prune_settled: bool) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(vec![start]);

        let mut settled = FxHashMap::default();
        settled.insert(start, 1);

        Self {
            queue,
            settled,
            prune_settled,
            peak: 1,
        }
    }

    /// Oldest partial ladder; BFS order keeps lengths non-decreasing
    pub(super) fn pop(&mut self) -> Option<Path> {
        self.queue.pop_front()
    }

    pub(super) fn push(&mut self, path: Path) {
        self.queue.push_back(path);
        self.peak = self.peak.max(self.queue.len());
    }

    pub(super) const fn peak(&self) -> usize {
        self.peak
    }

    /// Whether `next` may extend `path`
    ///
    /// Rejects words already on the path. With pruning on, also rejects words
    /// first reached at a strictly smaller rung count; same-depth revisits
    /// from other branches stay allowed so every co-shortest ladder survives.
    pub(super) fn admits(&mut self, path: &[usize], next: usize) -> bool {
        if path.contains(&next) {
            return false;
        }

        if !self.prune_settled {
            return true;
        }

        let rungs = path.len() + 1;
        let first_reached = *self.settled.entry(next).or_insert(rungs);
        first_reached >= rungs
    }
}
