//! Strictly Beams library - turret-and-beam game engine and search.
//!
//! Players take turns placing a turret on a blank cell and firing a beam
//! from it in one of four directions. The beam marks every cell it crosses
//! until it hits a turret or the edge. A player with no legal placement
//! loses.
//!
//! # Architecture
//!
//! - **Games**: board model, move engine, enumeration, strategies, Grundy numbers
//! - **Players**: human and strategy-driven participants
//! - **Session**: match state machine that alternates turns
//! - **Duel**: strategy-vs-strategy series with tallies
//!
//! # Example
//!
//! ```
//! use strictly_beams::{GameState, Strategy, has_any_legal_move};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut state = GameState::new(3)?;
//! while let Some(next) = Strategy::AvoidImmediateLoss.select(&state, &mut rng) {
//!     state = next;
//! }
//! assert!(!has_any_legal_move(&state));
//! # Ok::<(), strictly_beams::BoardSizeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod duel;
mod games;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, HostConfig};

// Crate-level exports - Duels and records
pub use duel::{DuelConfig, DuelSummary, MatchOutcome, MatchRecord, home_seat, run_duel};

// Crate-level exports - Participants
pub use players::{HumanParticipant, Participant, StrategyParticipant};

// Crate-level exports - Match state machine
pub use session::{MatchFinished, MatchInProgress, MatchSetup, MatchTransition};

// Crate-level exports - Game types and rules
pub use games::turret::{
    Board, BoardSizeError, Cell, Direction, GameState, MAX_BOARD_SIZE, Move, MoveError, Player,
    Strategy, apply_move, apply_move_code, grundy_number, has_any_legal_move, legal_moves, mex,
    successors, winner,
};

// Crate-level exports - Lower-level game modules
pub use games::turret::{contracts, grundy, invariants, rules, strategy};
