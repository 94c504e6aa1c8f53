//! Search lifecycle and outcome reporting

/// Lifecycle of a single search call
///
/// `Initialized -> Expanding -> Found | Exhausted`. Only `Found` and
/// `Exhausted` are reported as final states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Frontier holds only the start word
    Initialized,
    /// Popping partial ladders and enqueueing extensions
    Expanding,
    /// At least one ladder reached the target
    Found,
    /// Frontier emptied, the rung cap was hit, or the query was rejected
    Exhausted,
}

impl SearchState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Expanding => "expanding",
            Self::Found => "found",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Work counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial ladders popped and expanded
    pub paths_expanded: usize,
    /// Largest frontier size seen
    pub peak_frontier: usize,
    /// The rung cap stopped the search before the frontier emptied
    pub cap_reached: bool,
}

/// Result of a search together with how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    pub result: T,
    pub state: SearchState,
    pub stats: SearchStats,
}

impl<T> SearchOutcome<T> {
    /// Terminal outcome for a query that failed its preconditions
    pub(crate) fn rejected(result: T) -> Self {
        Self {
            result,
            state: SearchState::Exhausted,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.state == SearchState::Found
    }
}
