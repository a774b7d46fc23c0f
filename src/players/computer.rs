//! Computer participant driven by a [`Strategy`].

use super::Participant;
use crate::games::turret::{GameState, Strategy};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Plays moves chosen by a strategy.
pub struct StrategyParticipant {
    name: String,
    strategy: Strategy,
    rng: StdRng,
}

impl StrategyParticipant {
    /// Creates a participant; `seed` makes its random choices reproducible.
    #[instrument]
    pub fn new(strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: format!("Computer ({})", strategy.label()),
            strategy,
            rng,
        }
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Participant for StrategyParticipant {
    #[instrument(skip(self, state), fields(strategy = %self.strategy))]
    fn choose(&mut self, state: &GameState) -> Result<GameState> {
        let next = self
            .strategy
            .select(state, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("{} has no legal move", self.name))?;
        debug!(mov = ?next.last_move(), "Computer moved");
        Ok(next)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
