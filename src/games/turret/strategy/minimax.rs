//! Depth-bounded minimax play.
//!
//! Scores are from the point of view of the side choosing the move:
//! `+1` forced win, `-1` forced loss, `0` unknown within the horizon.

use super::super::rules::{has_any_legal_move, successors};
use super::super::types::GameState;
use super::{cautious, pick_uniform};
use rand::Rng;
use tracing::{debug, instrument};

/// Plies searched below each candidate move.
pub const SEARCH_DEPTH: u32 = 5;

/// Board size on which the opening is handed to the cautious strategy.
pub const OPENING_BOARD_SIZE: usize = 5;

/// Number of opening plies handed to the cautious strategy on that board.
pub const OPENING_PLIES: u32 = 4;

/// Minimax value of `state` with `depth` plies left to search.
///
/// `maximizing` tells whether the side to move in `state` is the one
/// the score is computed for.
pub fn evaluate(state: &GameState, depth: u32, maximizing: bool) -> i8 {
    if depth == 0 {
        return match (has_any_legal_move(state), maximizing) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        };
    }

    let children = successors(state);
    if children.is_empty() {
        return if maximizing { -1 } else { 1 };
    }

    if maximizing {
        let mut best = -1;
        for child in &children {
            best = best.max(evaluate(child, depth - 1, false));
            if best == 1 {
                break;
            }
        }
        best
    } else {
        let mut best = 1;
        for child in &children {
            best = best.min(evaluate(child, depth - 1, true));
            if best == -1 {
                break;
            }
        }
        best
    }
}

/// Every candidate move from `state` with its minimax score.
#[instrument(skip(state), fields(move_count = state.move_count()))]
pub fn score_candidates(state: &GameState) -> Vec<(GameState, i8)> {
    successors(state)
        .into_iter()
        .map(|candidate| {
            let score = evaluate(&candidate, SEARCH_DEPTH, false);
            (candidate, score)
        })
        .collect()
}

/// Picks the best-scoring candidate, breaking ties uniformly at random.
///
/// The opening of a 5×5 game is too wide to search and is played by
/// [`cautious::select`] instead.
pub fn select<R: Rng>(state: &GameState, rng: &mut R) -> Option<GameState> {
    if state.board().size() == OPENING_BOARD_SIZE && state.move_count() < OPENING_PLIES {
        debug!("Opening position, deferring to cautious strategy");
        return cautious::select(state, rng);
    }

    let scored = score_candidates(state);
    let best = scored.iter().map(|(_, score)| *score).max()?;
    let tied: Vec<GameState> = scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(candidate, _)| candidate)
        .collect();
    debug!(best, tied = tied.len(), "Minimax scored candidates");
    pick_uniform(tied, rng)
}
