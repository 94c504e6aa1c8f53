//! Word lists for ladder solving
//!
//! Provides the embedded corpus plus loading and length filtering. This is
//! where corpus validation happens; the index and search trust their input.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
