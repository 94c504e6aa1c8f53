//! Formatting utilities for terminal output
//!
//! Plain-text helpers; coloring happens in `display`.

use crate::core::{Ladder, Word};

/// Rungs with the letter changed from the previous rung uppercased
///
/// The first rung is left as is.
#[must_use]
pub fn mark_changes(ladder: &Ladder) -> Vec<String> {
    let mut marked = Vec::with_capacity(ladder.len());
    let mut previous: Option<&Word> = None;

    for rung in ladder {
        let changed = previous.and_then(|p| p.differing_position(rung));
        let text: String = rung
            .text()
            .char_indices()
            .map(|(i, c)| {
                if Some(i) == changed {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        marked.push(text);
        previous = Some(rung);
    }

    marked
}

/// One-line rendering of a ladder with changed letters marked
#[must_use]
pub fn ladder_line(ladder: &Ladder) -> String {
    mark_changes(ladder).join(" → ")
}

/// Caret under one letter position, e.g. `__^_`
#[must_use]
pub fn position_marker(len: usize, position: usize) -> String {
    (0..len)
        .map(|i| if i == position { '^' } else { '_' })
        .collect()
}

/// Horizontal bar for `count` out of `total`
#[must_use]
pub fn distribution_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count * width).div_ceil(total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn ladder(words: &[&str]) -> Ladder {
        words_from_slice(words).into()
    }

    #[test]
    fn mark_changes_uppercases_changed_letter() {
        let marked = mark_changes(&ladder(&["cat", "cot", "cog", "dog"]));
        assert_eq!(marked, ["cat", "cOt", "coG", "Dog"]);
    }

    #[test]
    fn mark_changes_single_rung() {
        assert_eq!(mark_changes(&ladder(&["cat"])), ["cat"]);
    }

    #[test]
    fn ladder_line_joins_with_arrows() {
        assert_eq!(ladder_line(&ladder(&["hope", "rope"])), "hope → Rope");
        assert_eq!(ladder_line(&Ladder::empty()), "");
    }

    #[test]
    fn position_marker_places_caret() {
        assert_eq!(position_marker(4, 0), "^___");
        assert_eq!(position_marker(3, 2), "__^");
    }

    #[test]
    fn distribution_bar_empty() {
        assert_eq!(distribution_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(distribution_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn distribution_bar_full() {
        assert_eq!(distribution_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn distribution_bar_rounds_up_small_counts() {
        assert_eq!(distribution_bar(1, 100, 10), "█░░░░░░░░░");
        assert_eq!(distribution_bar(5, 10, 10), "█████░░░░░");
    }
}
