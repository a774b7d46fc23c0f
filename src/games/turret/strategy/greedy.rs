//! Greedy win-in-one play.

use super::super::rules::{has_any_legal_move, successors};
use super::super::types::GameState;
use super::pick_uniform;
use rand::Rng;

/// Index of the first candidate that leaves the opponent without a move.
pub(crate) fn first_win(candidates: &[GameState]) -> Option<usize> {
    candidates.iter().position(|next| !has_any_legal_move(next))
}

/// Takes the first immediate win in enumeration order, else plays randomly.
pub fn select<R: Rng>(state: &GameState, rng: &mut R) -> Option<GameState> {
    let mut candidates = successors(state);
    match first_win(&candidates) {
        Some(index) => Some(candidates.swap_remove(index)),
        None => pick_uniform(candidates, rng),
    }
}
