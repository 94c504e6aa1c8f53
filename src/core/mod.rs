//! Core domain types for word ladders
//!
//! Plain value types shared by the index, the search, and the commands.

mod ladder;
mod mask;
mod word;

pub use ladder::Ladder;
pub use mask::Mask;
pub use word::{Word, WordError};
