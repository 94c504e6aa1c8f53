//! Command implementations

pub mod benchmark;
pub mod ladder;
pub mod neighbors;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_pairs};
pub use ladder::{
    AllShortestResult, LadderConfig, LadderResult, ShortestResult, find_all_ladders, find_ladder,
};
pub use neighbors::{NeighborReport, word_neighbors};
