//! Move-selection strategies for automated play.
//!
//! Every strategy maps a state to one of its successors (or `None` when
//! the side to move has already lost). Randomness is always injected, so
//! a seeded generator makes every choice reproducible.

pub mod cautious;
pub mod greedy;
pub mod minimax;
pub mod random;

use super::types::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Available strategies, in order of increasing look-ahead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Uniform choice over all legal moves.
    Random,
    /// Take an immediate win if one exists, else play randomly.
    #[strum(to_string = "greedy-win-in-1", serialize = "2-step")]
    #[serde(rename = "greedy-win-in-1", alias = "2-step")]
    GreedyWinIn1,
    /// Take an immediate win, else avoid handing one to the opponent.
    #[default]
    #[strum(to_string = "avoid-immediate-loss", serialize = "3-step")]
    #[serde(alias = "3-step")]
    AvoidImmediateLoss,
    /// Fixed-depth minimax over the game tree.
    #[strum(to_string = "bounded-minimax", serialize = "k-step")]
    #[serde(alias = "k-step")]
    BoundedMinimax,
}

impl Strategy {
    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::GreedyWinIn1 => "2-step",
            Strategy::AvoidImmediateLoss => "3-step",
            Strategy::BoundedMinimax => "K-step",
        }
    }

    /// Picks the next state for the side to move.
    ///
    /// Returns `None` if there is no legal move.
    #[instrument(skip(state, rng), fields(move_count = state.move_count()))]
    pub fn select<R: Rng>(self, state: &GameState, rng: &mut R) -> Option<GameState> {
        let choice = match self {
            Strategy::Random => random::select(state, rng),
            Strategy::GreedyWinIn1 => greedy::select(state, rng),
            Strategy::AvoidImmediateLoss => cautious::select(state, rng),
            Strategy::BoundedMinimax => minimax::select(state, rng),
        };
        match choice.as_ref().and_then(GameState::last_move) {
            Some(mov) => debug!(strategy = %self, %mov, "Strategy chose move"),
            None => debug!(strategy = %self, "Strategy found no legal move"),
        }
        choice
    }
}

/// Picks one candidate uniformly at random.
pub(crate) fn pick_uniform<R: Rng>(mut candidates: Vec<GameState>, rng: &mut R) -> Option<GameState> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
