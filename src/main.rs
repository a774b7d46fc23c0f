//! Strictly Beams - Unified CLI
//!
//! Play the turret-and-beam game, run strategy duels, or analyse boards.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_beams::{
    DuelConfig, FirstPlayer, GameState, HostConfig, HumanParticipant, MatchOutcome, MatchRecord,
    MatchSetup, StrategyParticipant, grundy_number, run_duel,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the game transcript; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            strategy,
            computer_first,
            seed,
        } => {
            let base = match config {
                Some(path) => HostConfig::from_file(path)?,
                None => HostConfig::default(),
            };
            let first = computer_first.then_some(FirstPlayer::Computer);
            run_play(base.with_overrides(size, strategy, first, seed)?)
        }
        Command::Duel {
            home,
            away,
            size,
            games,
            alternate,
            seed,
            json,
        } => run_duel_command(DuelConfig::new(home, away, size, games, alternate, seed), json),
        Command::Grundy { from, to } => run_grundy(from, to),
    }
}

/// Human vs. computer on stdin/stdout.
#[instrument]
fn run_play(config: HostConfig) -> Result<()> {
    info!("Starting interactive game");

    let stdin = io::stdin();
    let mut human = HumanParticipant::new("You", stdin.lock(), io::stdout());
    let mut computer = StrategyParticipant::new(*config.strategy(), *config.seed());

    let setup = MatchSetup::new(*config.board_size())?;
    let finished = match config.first_player() {
        FirstPlayer::Human => setup.start(&mut human, &mut computer),
        FirstPlayer::Computer => setup.start(&mut computer, &mut human),
    }
    .play_out()?;

    let record = MatchRecord::from_finished(&finished, *config.strategy(), *config.first_player());
    print!("{}", finished.state().board());
    match record.outcome() {
        MatchOutcome::Win => println!("{} has no move left. You win!", finished.winner().opponent()),
        MatchOutcome::Loss => println!("You have no move left. {} wins.", finished.winner_name()),
    }
    Ok(())
}

/// Strategy vs. strategy series.
#[instrument]
fn run_duel_command(config: DuelConfig, json: bool) -> Result<()> {
    let summary = run_duel(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!(
        "{} ({}) vs {} ({}) on {}x{}: {} games",
        summary.home(),
        summary.home().label(),
        summary.away(),
        summary.away().label(),
        summary.board_size(),
        summary.board_size(),
        summary.games()
    );
    println!("  {} wins: {}", summary.home(), summary.home_wins());
    println!("  {} wins: {}", summary.away(), summary.away_wins());
    println!("  first mover won: {}", summary.first_mover_wins());
    Ok(())
}

/// Grundy numbers of empty boards in a size range.
#[instrument]
fn run_grundy(from: usize, to: usize) -> Result<()> {
    for size in from..=to {
        let state = GameState::new(size)?;
        let value = grundy_number(&state);
        let verdict = if value == 0 { "second player wins" } else { "first player wins" };
        println!("{}x{}: {} ({})", size, size, value, verdict);
    }
    Ok(())
}

