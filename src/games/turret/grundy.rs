//! Sprague–Grundy values.
//!
//! Both players have the same moves from any position, so the game is
//! impartial and every position has a Grundy number. A position is lost
//! for the side to move exactly when its number is 0.
//!
//! The recursion visits the whole game tree with no caching. It is meant
//! for analysis of small boards (n ≤ 4), not for live play.

use super::rules::successors;
use super::types::GameState;
use tracing::instrument;

/// Minimum excluded value: the smallest non-negative integer not in `values`.
pub fn mex(values: impl IntoIterator<Item = u32>) -> u32 {
    let mut values: Vec<u32> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
        .iter()
        .zip(0..)
        .find(|(value, expected)| **value != *expected)
        .map_or(u32::try_from(values.len()).unwrap_or(u32::MAX), |(_, expected)| expected)
}

/// Grundy number of `state`.
#[instrument(skip(state), fields(size = state.board().size(), move_count = state.move_count()))]
pub fn grundy_number(state: &GameState) -> u32 {
    value(state)
}

fn value(state: &GameState) -> u32 {
    mex(successors(state).iter().map(value))
}
