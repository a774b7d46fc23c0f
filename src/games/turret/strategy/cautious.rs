//! Win-or-avoid-loss play.

use super::super::rules::successors;
use super::super::types::GameState;
use super::greedy::first_win;
use super::pick_uniform;
use rand::Rng;

/// True if the opponent, to move in `candidate`, has no immediate win.
pub(crate) fn is_safe(candidate: &GameState) -> bool {
    first_win(&successors(candidate)).is_none()
}

/// Takes an immediate win if there is one; otherwise picks uniformly
/// among moves that give the opponent no immediate win, falling back to
/// all moves when none are safe.
pub fn select<R: Rng>(state: &GameState, rng: &mut R) -> Option<GameState> {
    let mut candidates = successors(state);
    if let Some(index) = first_win(&candidates) {
        return Some(candidates.swap_remove(index));
    }

    let (safe, risky): (Vec<_>, Vec<_>) = candidates.into_iter().partition(is_safe);
    if safe.is_empty() {
        pick_uniform(risky, rng)
    } else {
        pick_uniform(safe, rng)
    }
}
