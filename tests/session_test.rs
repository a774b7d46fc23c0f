//! Tests for the match state machine and strategy duels.

use std::io::Cursor;
use strictly_beams::{
    Direction, DuelConfig, FirstPlayer, GameState, HumanParticipant, MatchOutcome, MatchRecord,
    MatchSetup, MatchTransition, Move, Participant, Player, Strategy, StrategyParticipant,
    apply_move, has_any_legal_move, run_duel,
};

/// Participant that hands back a doctored state instead of playing a move.
struct Doctored<F: FnMut(&GameState) -> GameState> {
    doctor: F,
}

impl<F: FnMut(&GameState) -> GameState> Participant for Doctored<F> {
    fn choose(&mut self, state: &GameState) -> anyhow::Result<GameState> {
        Ok((self.doctor)(state))
    }

    fn name(&self) -> &str {
        "Doctored"
    }
}

/// Rewrites fields of a state through its serialized form.
fn patch(state: &GameState, edit: impl FnOnce(&mut serde_json::Value)) -> GameState {
    let mut value = serde_json::to_value(state).unwrap();
    edit(&mut value);
    serde_json::from_value(value).unwrap()
}

fn first_turn_is_rejected(doctor: impl FnMut(&GameState) -> GameState) -> bool {
    let mut doctored = Doctored { doctor };
    let mut other = StrategyParticipant::new(Strategy::Random, Some(0));
    MatchSetup::new(3)
        .unwrap()
        .start(&mut doctored, &mut other)
        .advance()
        .is_err()
}

#[test]
fn test_honest_successor_is_accepted() {
    assert!(!first_turn_is_rejected(|state| {
        apply_move(state, Move::new(4, Direction::Down)).unwrap()
    }));
}

#[test]
fn test_two_turrets_in_one_turn_are_rejected() {
    assert!(first_turn_is_rejected(|state| {
        let once = apply_move(state, Move::new(0, Direction::Right)).unwrap();
        let twice = apply_move(&once, Move::new(6, Direction::Right)).unwrap();
        // Counters claim a single ply was played.
        patch(&twice, |value| {
            value["move_count"] = serde_json::json!(1);
            value["to_move"] = serde_json::to_value(Player::Two).unwrap();
        })
    }));
}

#[test]
fn test_state_without_recorded_move_is_rejected() {
    assert!(first_turn_is_rejected(|state| {
        let next = apply_move(state, Move::new(4, Direction::Down)).unwrap();
        patch(&next, |value| value["last_move"] = serde_json::Value::Null)
    }));
}

#[test]
fn test_recorded_move_must_match_board() {
    assert!(first_turn_is_rejected(|state| {
        let next = apply_move(state, Move::new(4, Direction::Down)).unwrap();
        let claimed = serde_json::to_value(Move::new(4, Direction::Up)).unwrap();
        patch(&next, |value| value["last_move"] = claimed)
    }));
}

#[test]
fn test_advance_one_turn_at_a_time() {
    let mut first = StrategyParticipant::new(Strategy::Random, Some(1));
    let mut second = StrategyParticipant::new(Strategy::Random, Some(2));
    let mut game = MatchSetup::new(3).unwrap().start(&mut first, &mut second);

    let mut turns = 0;
    let finished = loop {
        match game.advance().unwrap() {
            MatchTransition::InProgress(next) => {
                turns += 1;
                assert_eq!(next.state().move_count(), turns);
                game = next;
            }
            MatchTransition::Finished(done) => break done,
        }
    };
    assert!(!has_any_legal_move(finished.state()));
    assert!(finished.plies() <= 5);
}

#[test]
fn test_scripted_human_beats_greedy_on_two_by_two() {
    // Whatever the opening, the reply 2x2 board always has a win for the
    // second mover, so the computer (moving first) loses.
    let mut computer = StrategyParticipant::new(Strategy::GreedyWinIn1, Some(3));
    let mut human = HumanParticipant::new(
        "Tester",
        Cursor::new("0 0 right\n0 0 down\n0 1 left\n0 1 down\n1 0 right\n1 0 up\n1 1 left\n1 1 up\n"),
        Vec::new(),
    );

    let finished = MatchSetup::new(2)
        .unwrap()
        .start(&mut computer, &mut human)
        .play_out()
        .unwrap();

    assert_eq!(finished.winner(), Player::Two);
    assert_eq!(finished.winner_name(), "Tester");
    let record = MatchRecord::from_finished(&finished, Strategy::GreedyWinIn1, FirstPlayer::Computer);
    assert_eq!(*record.outcome(), MatchOutcome::Win);
    assert_eq!(*record.plies(), 2);
}

#[test]
fn test_human_input_running_out_fails_the_match() {
    let mut human = HumanParticipant::new("Tester", Cursor::new("nonsense\n"), Vec::new());
    let mut computer = StrategyParticipant::new(Strategy::Random, Some(0));
    let result = MatchSetup::new(3).unwrap().start(&mut human, &mut computer).play_out();
    assert!(result.is_err());
}

#[test]
fn test_duel_is_reproducible_with_seed() {
    let config = DuelConfig::new(Strategy::Random, Strategy::AvoidImmediateLoss, 3, 5, true, Some(99));
    let a = run_duel(config).unwrap();
    let b = run_duel(config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_duel_summary_json() {
    let config = DuelConfig::new(Strategy::GreedyWinIn1, Strategy::Random, 2, 2, false, Some(5));
    let summary = run_duel(config).unwrap();
    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["home"], "greedy-win-in-1");
    assert_eq!(json["away"], "random");
    assert_eq!(json["records"].as_array().unwrap().len(), 2);
}
