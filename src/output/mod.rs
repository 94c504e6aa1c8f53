//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_all_result, print_benchmark_result, print_neighbor_report, print_shortest_result,
};
