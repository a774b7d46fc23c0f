//! Terminal detection.

use super::super::action::Move;
use super::super::contracts::LegalMove;
use super::super::direction::Direction;
use super::super::types::{Cell, GameState, Player};
use tracing::instrument;

/// Returns true if the side to move has at least one legal move.
///
/// Stops at the first legal move and builds no successor states.
#[instrument(level = "trace", skip(state), fields(move_count = state.move_count()))]
pub fn has_any_legal_move(state: &GameState) -> bool {
    state
        .board()
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Blank)
        .any(|(position, _)| {
            Direction::ALL
                .into_iter()
                .any(|d| LegalMove::check(state, &Move::new(position, d)).is_ok())
        })
}

/// The winner, if the game is over.
///
/// A side with no legal move loses, so the winner is its opponent.
/// There are no draws.
#[instrument(skip(state), fields(move_count = state.move_count()))]
pub fn winner(state: &GameState) -> Option<Player> {
    if has_any_legal_move(state) {
        None
    } else {
        Some(state.to_move().opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::turret::rules::{apply_move, successors};

    #[test]
    fn test_single_cell_is_terminal() {
        let game = GameState::new(1).unwrap();
        assert!(!has_any_legal_move(&game));
        assert_eq!(winner(&game), Some(Player::Two));
    }

    #[test]
    fn test_agrees_with_enumeration() {
        let game = GameState::new(3).unwrap();
        for next in successors(&game) {
            assert_eq!(has_any_legal_move(&next), !successors(&next).is_empty());
        }
    }

    #[test]
    fn test_filled_two_by_two() {
        let game = GameState::new(2).unwrap();
        let game = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        let game = apply_move(&game, Move::new(2, Direction::Right)).unwrap();
        assert!(!has_any_legal_move(&game));
        assert_eq!(winner(&game), Some(Player::Two));
    }

    #[test]
    fn test_faulted_state_has_no_moves() {
        let game = GameState::new(3)
            .unwrap()
            .with_fault(crate::games::turret::MoveError::AlreadyErrored);
        assert!(!has_any_legal_move(&game));
    }
}
