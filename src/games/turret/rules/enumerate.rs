//! One-ply move enumeration.

use super::super::action::Move;
use super::super::direction::Direction;
use super::super::types::{Cell, GameState};
use super::placement::apply_move;
use tracing::instrument;

/// Every move the engine accepts from `state`, with its resulting state.
///
/// Order is row-major over blank cells, then Left, Right, Up, Down.
/// Strategies that take the "first" match rely on this order being stable.
fn accepted(state: &GameState) -> impl Iterator<Item = (Move, GameState)> + '_ {
    state
        .board()
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Blank)
        .flat_map(|(position, _)| Direction::ALL.map(|d| Move::new(position, d)))
        .filter_map(move |mov| apply_move(state, mov).ok().map(|next| (mov, next)))
}

/// All states reachable from `state` in one ply.
#[instrument(level = "trace", skip(state), fields(move_count = state.move_count()))]
pub fn successors(state: &GameState) -> Vec<GameState> {
    accepted(state).map(|(_, next)| next).collect()
}

/// All legal moves from `state`, in the same order as [`successors`].
#[instrument(level = "trace", skip(state), fields(move_count = state.move_count()))]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    accepted(state).map(|(mov, _)| mov).collect()
}
