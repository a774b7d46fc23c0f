//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the side to move follows the move counter.
///
/// Player 1 moves on even counts, Player 2 on odd ones.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let expected = if game.move_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, ...)"
    }
}
