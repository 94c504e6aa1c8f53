//! Ladder search
//!
//! Breadth-first search over a [`MaskIndex`](crate::index::MaskIndex) where
//! the frontier holds whole partial ladders. Two queries are offered: the
//! first shortest ladder, and every ladder tied for shortest. Both stop at a
//! configurable rung cap and report "no path" beyond it.

mod config;
mod engine;
mod frontier;
mod state;

pub use config::{DEFAULT_MAX_RUNGS, SearchConfig};
pub use engine::LadderSearch;
pub use state::{SearchOutcome, SearchState, SearchStats};
