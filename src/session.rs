//! Match state machine: one current state, two participants, alternate
//! turns until the side to move is stuck.

use crate::games::turret::{BoardSizeError, GameState, Player, apply_move, has_any_legal_move};
use crate::players::Participant;
use anyhow::{Result, bail};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match ready to start: a fresh board and nobody seated.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    state: GameState,
}

impl MatchSetup {
    /// Creates a match on an empty board of side `size`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Ok(Self {
            state: GameState::new(size)?,
        })
    }

    /// Returns the starting state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seats the participants (Player 1 first) and starts the match.
    #[instrument(skip_all)]
    pub fn start<'p>(
        self,
        first: &'p mut dyn Participant,
        second: &'p mut dyn Participant,
    ) -> MatchInProgress<'p> {
        info!(
            first = first.name(),
            second = second.name(),
            size = self.state.board().size(),
            "Match started"
        );
        MatchInProgress {
            state: self.state,
            seats: [first, second],
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress; the side to move still has a legal move.
pub struct MatchInProgress<'p> {
    state: GameState,
    seats: [&'p mut dyn Participant; 2],
}

impl<'p> MatchInProgress<'p> {
    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays one turn, consuming the match and returning the next phase.
    ///
    /// # Errors
    ///
    /// Fails if the participant errors or returns a state that replaying
    /// its recorded move on the current state does not reproduce.
    #[instrument(skip(self), fields(move_count = self.state.move_count()))]
    pub fn advance(mut self) -> Result<MatchTransition<'p>> {
        if !has_any_legal_move(&self.state) {
            return Ok(MatchTransition::Finished(self.finish()));
        }

        let seat = match self.state.to_move() {
            Player::One => 0,
            Player::Two => 1,
        };
        let next = self.seats[seat].choose(&self.state)?;
        let replayed = next
            .last_move()
            .and_then(|mov| apply_move(&self.state, mov).ok());
        if replayed.as_ref() != Some(&next) {
            bail!(
                "{} returned a state that does not follow the current one",
                self.seats[seat].name()
            );
        }
        self.state = next;

        if has_any_legal_move(&self.state) {
            Ok(MatchTransition::InProgress(self))
        } else {
            Ok(MatchTransition::Finished(self.finish()))
        }
    }

    /// Plays turns until the match ends.
    #[instrument(skip(self))]
    pub fn play_out(self) -> Result<MatchFinished> {
        let mut game = self;
        loop {
            match game.advance()? {
                MatchTransition::InProgress(g) => game = g,
                MatchTransition::Finished(done) => return Ok(done),
            }
        }
    }

    fn finish(self) -> MatchFinished {
        let winner = self.state.to_move().opponent();
        let winner_name = match winner {
            Player::One => self.seats[0].name().to_string(),
            Player::Two => self.seats[1].name().to_string(),
        };
        info!(%winner, winner_name = %winner_name, plies = self.state.move_count(), "Match finished");
        MatchFinished {
            state: self.state,
            winner,
            winner_name,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Finished match. The winner is always known; there are no draws.
#[derive(Debug, Clone)]
pub struct MatchFinished {
    state: GameState,
    winner: Player,
    winner_name: String,
}

impl MatchFinished {
    /// Returns the winning side.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the winning participant's name.
    pub fn winner_name(&self) -> &str {
        &self.winner_name
    }

    /// Returns the final state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of moves played.
    pub fn plies(&self) -> u32 {
        self.state.move_count()
    }

    /// Restarts on a board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> Result<MatchSetup, BoardSizeError> {
        MatchSetup::new(self.state.board().size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of playing a turn.
pub enum MatchTransition<'p> {
    /// Match continues.
    InProgress(MatchInProgress<'p>),
    /// Match finished.
    Finished(MatchFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::turret::Strategy;
    use crate::players::StrategyParticipant;

    #[test]
    fn test_single_cell_match_ends_immediately() {
        let mut a = StrategyParticipant::new(Strategy::Random, Some(1));
        let mut b = StrategyParticipant::new(Strategy::Random, Some(2));
        let done = MatchSetup::new(1).unwrap().start(&mut a, &mut b).play_out().unwrap();
        assert_eq!(done.winner(), Player::Two);
        assert_eq!(done.plies(), 0);
    }

    #[test]
    fn test_match_alternates_until_stuck() {
        let mut a = StrategyParticipant::new(Strategy::Random, Some(3));
        let mut b = StrategyParticipant::new(Strategy::GreedyWinIn1, Some(4));
        let done = MatchSetup::new(3).unwrap().start(&mut a, &mut b).play_out().unwrap();
        assert!(!has_any_legal_move(done.state()));
        assert_eq!(done.winner(), done.state().to_move().opponent());
        assert!(done.plies() > 0);
    }

    #[test]
    fn test_restart_keeps_size() {
        let mut a = StrategyParticipant::new(Strategy::Random, Some(5));
        let mut b = StrategyParticipant::new(Strategy::Random, Some(6));
        let done = MatchSetup::new(2).unwrap().start(&mut a, &mut b).play_out().unwrap();
        let setup = done.restart().unwrap();
        assert_eq!(setup.state().board().size(), 2);
        assert_eq!(setup.state().move_count(), 0);
    }
}
