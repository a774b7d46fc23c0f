//! Beam directions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction a turret fires its beam.
///
/// The numeric codes (0-3) match the order used when enumerating moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward column 0 (code 0).
    #[strum(to_string = "left", serialize = "l")]
    Left,
    /// Toward the last column (code 1).
    #[strum(to_string = "right", serialize = "r")]
    Right,
    /// Toward row 0 (code 2).
    #[strum(to_string = "up", serialize = "u")]
    Up,
    /// Toward the last row (code 3).
    #[strum(to_string = "down", serialize = "d")]
    Down,
}

impl Direction {
    /// All four directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Creates a direction from its numeric code.
    #[instrument]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Numeric code of this direction.
    pub fn code(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Unit step as (row delta, column delta).
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// True for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}
