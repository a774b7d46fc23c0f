//! Turret count invariant: every accepted move adds exactly one turret.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: the number of turrets equals the move counter.
pub struct TurretCountInvariant;

impl Invariant<GameState> for TurretCountInvariant {
    fn holds(game: &GameState) -> bool {
        usize::try_from(game.move_count()).is_ok_and(|n| n == game.board().count(Cell::Turret))
    }

    fn description() -> &'static str {
        "One turret per accepted move"
    }
}
