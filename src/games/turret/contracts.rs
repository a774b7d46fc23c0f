//! Contract-based validation for turret moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::direction::Direction;
use super::invariants::{
    Invariant, InvariantSet, MonotonicBoardInvariant, Transition, TurretInvariants,
};
use super::types::{Cell, GameState};
use tracing::warn;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// Returns a description of every broken invariant.
    fn post(before: &S, after: &S) -> Result<(), Vec<String>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the state carries no fault.
pub struct NoFault;

impl NoFault {
    /// Fails with `AlreadyErrored` on a faulted state.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.fault() {
            Some(_) => Err(MoveError::AlreadyErrored),
            None => Ok(()),
        }
    }
}

/// Precondition: the position is on the board.
pub struct PositionInRange;

impl PositionInRange {
    /// Fails with `PositionOutOfRange` for positions past the last cell.
    pub fn check(state: &GameState, position: usize) -> Result<(), MoveError> {
        let cells = state.board().len();
        if position >= cells {
            Err(MoveError::PositionOutOfRange { position, cells })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is blank.
pub struct CellIsBlank;

impl CellIsBlank {
    /// Fails with `CellOccupied` when something is already there.
    pub fn check(state: &GameState, position: usize) -> Result<(), MoveError> {
        match state.board().cell(position) {
            Some(Cell::Blank) => Ok(()),
            Some(cell) => Err(MoveError::CellOccupied { position, cell }),
            None => Err(MoveError::PositionOutOfRange {
                position,
                cells: state.board().len(),
            }),
        }
    }
}

/// Precondition: the beam's first cell is on the board.
pub struct BeamHasExit;

impl BeamHasExit {
    /// Returns the index of the first beam cell.
    pub fn check(state: &GameState, mov: &Move) -> Result<usize, MoveError> {
        let Move {
            position,
            direction,
        } = *mov;
        state
            .board()
            .step(position, direction)
            .ok_or(if direction.is_horizontal() {
                MoveError::BeamOriginOutOfRange {
                    position,
                    direction,
                }
            } else {
                MoveError::BeamTargetOutOfRange {
                    position,
                    direction,
                }
            })
    }
}

/// Precondition: the beam's first cell is not a turret.
pub struct ExitNotTurret;

impl ExitNotTurret {
    /// Fails with `BlockedByTurret` when the neighbour is a turret.
    pub fn check(state: &GameState, mov: &Move, exit: usize) -> Result<(), MoveError> {
        if state.board().cell(exit) == Some(Cell::Turret) {
            Err(MoveError::BlockedByTurret {
                position: mov.position,
                direction: mov.direction,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, in validation order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// Returns the index of the beam's first cell.
    pub fn check(state: &GameState, mov: &Move) -> Result<usize, MoveError> {
        NoFault::check(state)?;
        PositionInRange::check(state, mov.position)?;
        CellIsBlank::check(state, mov.position)?;
        let exit = BeamHasExit::check(state, mov)?;
        ExitNotTurret::check(state, mov, exit)?;
        Ok(exit)
    }

    /// Validates a move given as a raw direction code.
    ///
    /// The code is checked after the fault and the position, so errors come
    /// out in the same order as for typed moves.
    pub fn check_code(state: &GameState, position: usize, code: u8) -> Result<Move, MoveError> {
        NoFault::check(state)?;
        PositionInRange::check(state, position)?;
        let direction = Direction::from_code(code).ok_or(MoveError::DirectionInvalid(code))?;
        Ok(Move::new(position, direction))
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No fault, position in range, cell blank
/// - Beam has a first cell and it is not a turret
///
/// Postconditions:
/// - One turret per accepted move
/// - Side to move follows move-count parity
/// - Every cell changed monotonically
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(state, action).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<String>> {
        let mut broken: Vec<String> = TurretInvariants::check_all(after)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.description)
            .collect();
        if !MonotonicBoardInvariant::holds(&Transition::new(before, after)) {
            broken.push(MonotonicBoardInvariant::description().to_string());
        }
        if broken.is_empty() {
            Ok(())
        } else {
            warn!(?broken, "Move postcondition failed");
            Err(broken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::turret::rules::apply_move;

    #[test]
    fn test_precondition_blank_cell() {
        let game = GameState::new(3).unwrap();
        assert!(MoveContract::pre(&game, &Move::new(4, Direction::Down)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameState::new(3).unwrap();
        let game = apply_move(&game, Move::new(4, Direction::Down)).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(7, Direction::Left)),
            Err(MoveError::CellOccupied {
                position: 7,
                cell: Cell::VerticalBeam
            })
        );
    }

    #[test]
    fn test_edge_errors_split_by_orientation() {
        let game = GameState::new(3).unwrap();
        assert!(matches!(
            LegalMove::check(&game, &Move::new(0, Direction::Left)),
            Err(MoveError::BeamOriginOutOfRange { .. })
        ));
        assert!(matches!(
            LegalMove::check(&game, &Move::new(0, Direction::Up)),
            Err(MoveError::BeamTargetOutOfRange { .. })
        ));
    }

    #[test]
    fn test_check_code_order() {
        let game = GameState::new(2).unwrap();
        // Position is checked before the direction code.
        assert!(matches!(
            LegalMove::check_code(&game, 9, 9),
            Err(MoveError::PositionOutOfRange { .. })
        ));
        assert_eq!(
            LegalMove::check_code(&game, 0, 7),
            Err(MoveError::DirectionInvalid(7))
        );
        let faulted = game.with_fault(MoveError::DirectionInvalid(7));
        assert_eq!(
            LegalMove::check_code(&faulted, 9, 9),
            Err(MoveError::AlreadyErrored)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameState::new(3).unwrap();
        let after = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameState::new(3).unwrap();
        let mut after = apply_move(&game, Move::new(0, Direction::Right)).unwrap();
        after.board.set(0, Cell::Blank);
        let broken = MoveContract::post(&game, &after).unwrap_err();
        assert!(!broken.is_empty());
    }
}
