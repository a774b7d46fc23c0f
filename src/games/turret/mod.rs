//! The turret-and-beam game: board model, move engine, search.

mod action;
pub mod contracts;
mod direction;
pub mod grundy;
pub mod invariants;
pub mod rules;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use direction::Direction;
pub use grundy::{grundy_number, mex};
pub use rules::{apply_move, apply_move_code, has_any_legal_move, legal_moves, successors, winner};
pub use strategy::Strategy;
pub use types::{Board, BoardSizeError, Cell, GameState, MAX_BOARD_SIZE, Player};
