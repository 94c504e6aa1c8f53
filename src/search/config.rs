//! Search limits

/// Default rung cap
///
/// Ladders longer than this are reported as "no path".
pub const DEFAULT_MAX_RUNGS: usize = 7;

/// Configuration for a ladder search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest ladder, in rungs, the search will return
    pub max_rungs: usize,
    /// Drop extensions to words already reached at a smaller depth
    ///
    /// Only paths that cannot prefix a shortest ladder are dropped, so results
    /// are identical with or without it.
    pub prune_settled: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_rungs: DEFAULT_MAX_RUNGS,
            prune_settled: true,
        }
    }

    #[must_use]
    pub const fn with_max_rungs(mut self, max_rungs: usize) -> Self {
        self.max_rungs = max_rungs;
        self
    }

    #[must_use]
    pub const fn with_pruning(mut self, prune_settled: bool) -> Self {
        self.prune_settled = prune_settled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        assert_eq!(SearchConfig::default(), SearchConfig::new());
        assert_eq!(SearchConfig::default().max_rungs, 7);
        assert!(SearchConfig::default().prune_settled);
    }

    #[test]
    fn builders_override_fields() {
        let config = SearchConfig::new().with_max_rungs(3).with_pruning(false);
        assert_eq!(config.max_rungs, 3);
        assert!(!config.prune_settled);
    }
}
