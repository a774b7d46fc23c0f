//! Participant trait and implementations.

mod computer;
mod human;

pub use computer::StrategyParticipant;
pub use human::HumanParticipant;

use crate::games::turret::GameState;
use anyhow::Result;

/// Anything that can take a turn.
pub trait Participant {
    /// Chooses the next state for the side to move.
    ///
    /// Only called on states where a legal move exists.
    fn choose(&mut self, state: &GameState) -> Result<GameState>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;
}
