//! Core domain types for the turret-and-beam game.

use super::action::{Move, MoveError};
use super::direction::Direction;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 16;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player 1 (moves first).
    #[display("Player 1")]
    One,
    /// Player 2.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Contents of a single board cell.
///
/// Cells carry no owner. A turret or beam looks the same no matter
/// which side put it there.
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
)]
pub enum Cell {
    /// Nothing here yet.
    #[default]
    Blank,
    /// A turret. Permanent, and stops any beam.
    Turret,
    /// Crossed by a left/right beam.
    HorizontalBeam,
    /// Crossed by an up/down beam.
    VerticalBeam,
    /// Crossed by beams in both orientations.
    CrossBeam,
}

impl Cell {
    /// Returns true for any of the three beam kinds.
    pub fn is_beam(self) -> bool {
        matches!(
            self,
            Cell::HorizontalBeam | Cell::VerticalBeam | Cell::CrossBeam
        )
    }

    /// The cell a beam travelling in `direction` leaves behind.
    ///
    /// Returns `None` when the beam stops here (a turret).
    pub fn struck_by(self, direction: Direction) -> Option<Cell> {
        match (self, direction.is_horizontal()) {
            (Cell::Turret, _) => None,
            (Cell::Blank, true) => Some(Cell::HorizontalBeam),
            (Cell::Blank, false) => Some(Cell::VerticalBeam),
            (Cell::HorizontalBeam, true) => Some(Cell::HorizontalBeam),
            (Cell::VerticalBeam, false) => Some(Cell::VerticalBeam),
            (Cell::HorizontalBeam, false) | (Cell::VerticalBeam, true) => Some(Cell::CrossBeam),
            (Cell::CrossBeam, _) => Some(Cell::CrossBeam),
        }
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Blank => '.',
            Cell::Turret => 'O',
            Cell::HorizontalBeam => '-',
            Cell::VerticalBeam => '|',
            Cell::CrossBeam => '+',
        }
    }
}

/// Requested board size is outside `1..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Board size {} is out of range (must be 1-{})", size, MAX_BOARD_SIZE)]
pub struct BoardSizeError {
    /// The rejected size.
    pub size: usize,
}

impl std::error::Error for BoardSizeError {}

/// Square n×n board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new blank board of side `size`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardSizeError { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Blank; size * size],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; boards have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cell(row * self.size + col)
    }

    /// Gets the cell at a linear index `row * size + col`.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts cells of one kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Splits a linear index into (row, col).
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Index of the cell one step from `index` in `direction`.
    ///
    /// Returns `None` when the step leaves the board.
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.coordinates(index);
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;
        Some(row * self.size + col)
    }

    pub(super) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Complete game state.
///
/// States are values: applying a move builds a new state and leaves
/// the old one untouched, so one position can be explored many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) to_move: Player,
    pub(super) move_count: u32,
    pub(super) fault: Option<MoveError>,
    pub(super) last_move: Option<Move>,
}

impl GameState {
    /// Creates a new game: all cells blank, Player 1 to move.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Player::One,
            move_count: 0,
            fault: None,
            last_move: None,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The error attached by the host, if any.
    pub fn fault(&self) -> Option<&MoveError> {
        self.fault.as_ref()
    }

    /// The move that produced this state.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns a copy flagged with a rejected attempt's error.
    ///
    /// A faulted state refuses further moves until [`GameState::cleared`].
    #[instrument(skip(self))]
    pub fn with_fault(&self, error: MoveError) -> Self {
        Self {
            fault: Some(error),
            ..self.clone()
        }
    }

    /// Returns a copy with the fault removed.
    pub fn cleared(&self) -> Self {
        Self {
            fault: None,
            ..self.clone()
        }
    }
}
