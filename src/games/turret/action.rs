//! First-class action types for the turret game.
//!
//! A move is a turret placement plus the direction of its beam. Moves are
//! plain values: they can be validated, applied, logged and serialized
//! independently of any particular state.

use super::direction::Direction;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: place a turret at `position` and fire toward `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Linear cell index, `row * size + col`.
    pub position: usize,
    /// Beam direction.
    pub direction: Direction,
}

impl Move {
    /// Builds a move from board coordinates.
    #[instrument]
    pub fn at(row: usize, col: usize, size: usize, direction: Direction) -> Self {
        Self::new(row * size + col, direction)
    }

    /// Returns the target cell index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the beam direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turret at {} firing {}", self.position, self.direction)
    }
}

/// Reason a move was rejected.
///
/// Variants are listed in validation order; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The state already carries a fault.
    #[display("Game state is already in an error condition")]
    AlreadyErrored,

    /// Position is not on the board.
    #[display("Position {} is out of range (board has {} cells)", position, cells)]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// Direction code is not one of the four directions.
    #[display("Direction code {} is invalid (must be 0-3)", _0)]
    DirectionInvalid(u8),

    /// Target cell is not blank.
    #[display("Cell {} is already {:?}", position, cell)]
    CellOccupied {
        /// Requested position.
        position: usize,
        /// What is already there.
        cell: Cell,
    },

    /// A horizontal beam would leave the board on its first step.
    #[display("Beam from {} cannot fire {}: no column that way", position, direction)]
    BeamOriginOutOfRange {
        /// Turret position.
        position: usize,
        /// Requested direction.
        direction: Direction,
    },

    /// A vertical beam would leave the board on its first step.
    #[display("Beam from {} cannot fire {}: no row that way", position, direction)]
    BeamTargetOutOfRange {
        /// Turret position.
        position: usize,
        /// Requested direction.
        direction: Direction,
    },

    /// The neighbouring cell in the firing direction holds a turret.
    #[display("Beam from {} firing {} is blocked by a turret", position, direction)]
    BlockedByTurret {
        /// Turret position.
        position: usize,
        /// Requested direction.
        direction: Direction,
    },
}

impl std::error::Error for MoveError {}
