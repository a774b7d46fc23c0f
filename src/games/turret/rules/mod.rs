//! Game rules for the turret game.
//!
//! This module contains pure functions over [`GameState`](super::GameState):
//! applying a move, listing what can be played next, and deciding whether
//! the side to move is out of options.

pub mod enumerate;
pub mod placement;
pub mod terminal;

pub use enumerate::{legal_moves, successors};
pub use placement::{apply_move, apply_move_code};
pub use terminal::{has_any_legal_move, winner};
