//! Turret placement and beam tracing.

use super::super::action::{Move, MoveError};
use super::super::contracts::{Contract, LegalMove, MoveContract};
use super::super::types::{Cell, GameState};
use tracing::{debug, instrument};

/// Applies a move, returning the resulting state.
///
/// The source state is never modified. Validation runs to completion
/// before anything is built, so a rejected move leaves no trace.
///
/// # Errors
///
/// Returns the first failing check, in order: fault, position, blank
/// cell, beam exit on the board, beam exit not a turret.
#[instrument(level = "trace", skip(state), fields(to_move = %state.to_move()))]
pub fn apply_move(state: &GameState, mov: Move) -> Result<GameState, MoveError> {
    let exit = LegalMove::check(state, &mov).inspect_err(|error| {
        debug!(%error, %mov, "Move rejected");
    })?;

    let mut next = state.clone();
    next.board.set(mov.position, Cell::Turret);
    next.to_move = state.to_move.opponent();
    next.move_count = state.move_count + 1;
    next.last_move = Some(mov);

    let mut cursor = Some(exit);
    while let Some(index) = cursor {
        let Some(marked) = next.board.cell(index).and_then(|c| c.struck_by(mov.direction)) else {
            break;
        };
        next.board.set(index, marked);
        cursor = next.board.step(index, mov.direction);
    }

    debug_assert_eq!(MoveContract::post(state, &next), Ok(()));

    Ok(next)
}

/// Applies a move given as a position and a raw direction code (0-3).
///
/// # Errors
///
/// As [`apply_move`], with `DirectionInvalid` checked right after the
/// position.
#[instrument(level = "trace", skip(state))]
pub fn apply_move_code(state: &GameState, position: usize, code: u8) -> Result<GameState, MoveError> {
    let mov = LegalMove::check_code(state, position, code)?;
    apply_move(state, mov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::turret::{Direction, Player};

    #[test]
    fn test_move_places_turret_and_flips_turn() {
        let game = GameState::new(3).unwrap();
        let next = apply_move(&game, Move::new(4, Direction::Down)).unwrap();
        assert_eq!(next.board().cell(4), Some(Cell::Turret));
        assert_eq!(next.board().cell(7), Some(Cell::VerticalBeam));
        assert_eq!(next.to_move(), Player::Two);
        assert_eq!(next.move_count(), 1);
        assert_eq!(next.last_move(), Some(Move::new(4, Direction::Down)));
    }

    #[test]
    fn test_beam_runs_to_edge() {
        let game = GameState::new(4).unwrap();
        let next = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        assert_eq!(next.board().cells()[..4], [
            Cell::Turret,
            Cell::HorizontalBeam,
            Cell::HorizontalBeam,
            Cell::HorizontalBeam,
        ]);
        assert_eq!(next.board().count(Cell::Blank), 12);
    }

    #[test]
    fn test_beam_stops_at_turret() {
        let game = GameState::new(4).unwrap();
        let game = apply_move(&game, Move::new(2, Direction::Down)).unwrap();
        let game = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        assert_eq!(game.board().cell(1), Some(Cell::HorizontalBeam));
        assert_eq!(game.board().cell(2), Some(Cell::Turret));
        assert_eq!(game.board().cell(3), Some(Cell::Blank));
    }

    #[test]
    fn test_beam_passes_through_beams() {
        let game = GameState::new(3).unwrap();
        let game = apply_move(&game, Move::new(1, Direction::Down)).unwrap();
        let game = apply_move(&game, Move::new(3, Direction::Right)).unwrap();
        assert_eq!(game.board().cell(4), Some(Cell::CrossBeam));
        assert_eq!(game.board().cell(5), Some(Cell::HorizontalBeam));
    }

    #[test]
    fn test_rejected_move_reports_first_failure() {
        let game = GameState::new(2).unwrap();
        assert_eq!(
            apply_move(&game, Move::new(4, Direction::Left)),
            Err(MoveError::PositionOutOfRange {
                position: 4,
                cells: 4
            })
        );
        let game = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        assert_eq!(
            apply_move(&game, Move::new(1, Direction::Down)),
            Err(MoveError::CellOccupied {
                position: 1,
                cell: Cell::HorizontalBeam
            })
        );
        assert_eq!(
            apply_move(&game, Move::new(2, Direction::Up)),
            Err(MoveError::BlockedByTurret {
                position: 2,
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn test_code_variant_rejects_bad_code() {
        let game = GameState::new(3).unwrap();
        assert_eq!(
            apply_move_code(&game, 4, 4),
            Err(MoveError::DirectionInvalid(4))
        );
        assert_eq!(
            apply_move_code(&game, 4, 3),
            apply_move(&game, Move::new(4, Direction::Down))
        );
    }

    #[test]
    fn test_faulted_state_refuses_moves() {
        let game = GameState::new(3)
            .unwrap()
            .with_fault(MoveError::DirectionInvalid(9));
        assert_eq!(
            apply_move(&game, Move::new(4, Direction::Down)),
            Err(MoveError::AlreadyErrored)
        );
    }
}
