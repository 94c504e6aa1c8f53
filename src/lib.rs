//! Word Ladder
//!
//! Finds word ladders: chains from a start word to a target word where each
//! step changes exactly one letter in place and every rung is a real word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::index::MaskIndex;
//! use word_ladder::search::LadderSearch;
//! use word_ladder::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["hope", "hose", "rose", "rope"]);
//! let index = MaskIndex::build(&corpus);
//! let search = LadderSearch::new(&index);
//!
//! let ladder = search.shortest_ladder("hope", "rose");
//! assert_eq!(ladder.len(), 3);
//!
//! let all = search.all_shortest_ladders("hope", "rose");
//! assert_eq!(all.len(), 2);
//! ```

// Core domain types
pub mod core;

// Wildcard mask index (the ladder graph)
pub mod index;

// Breadth-first ladder search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
