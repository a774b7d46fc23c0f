//! Human participant reading moves from a text stream.

use super::Participant;
use crate::games::turret::{Direction, GameState, Move, apply_move};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Reads `row col direction` lines, e.g. `1 2 left` or `0 0 d`.
///
/// Rejected moves are reported on the output and the prompt repeats.
pub struct HumanParticipant<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanParticipant<R, W> {
    /// Creates a human participant over the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Parses one input line into a move on a board of side `size`.
    #[instrument]
    pub fn parse_move(line: &str, size: usize) -> Result<Move> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [row, col, direction] = parts.as_slice() else {
            bail!("expected `row col direction`, got {:?}", line.trim());
        };
        let row: usize = row.parse().context("row must be a number")?;
        let col: usize = col.parse().context("column must be a number")?;
        if row >= size || col >= size {
            bail!("({}, {}) is off the {}x{} board", row, col, size, size);
        }
        let direction = Direction::from_str(direction)
            .with_context(|| format!("unknown direction {:?}", direction))?;
        Ok(Move::at(row, col, size, direction))
    }
}

impl<R: BufRead, W: Write> Participant for HumanParticipant<R, W> {
    #[instrument(skip(self, state), fields(name = %self.name))]
    fn choose(&mut self, state: &GameState) -> Result<GameState> {
        let size = state.board().size();
        loop {
            write!(
                self.output,
                "{}\n{} (row col direction)> ",
                state.board(),
                state.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("{} closed the input", self.name);
            }

            let mov = match Self::parse_move(&line, size) {
                Ok(mov) => mov,
                Err(e) => {
                    writeln!(self.output, "Invalid input: {:#}", e)?;
                    continue;
                }
            };

            match apply_move(state, mov) {
                Ok(next) => return Ok(next),
                Err(e) => {
                    debug!(error = %e, "Human move rejected");
                    writeln!(self.output, "Illegal move: {}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
