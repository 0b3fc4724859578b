//! Engine integration tests: full games through the host-facing API.

use rust_boardgame::core::{Coord, PlayerId, RulesError};
use rust_boardgame::engine::{Engine, EngineConfig};
use rust_boardgame::games::go_capture::{GoCaptureEvaluator, GoCaptureRules};
use rust_boardgame::rules::Variant;
use rust_boardgame::search::Difficulty;

// =============================================================================
// Move Intent Validation
// =============================================================================

#[test]
fn test_checkers_intent_flow() {
    let mut engine = Engine::new(EngineConfig::new(Variant::Checkers));

    // Out-of-envelope intents are rejected without touching the state.
    assert!(engine.attempt_move(Some(Coord::new(2, 1)), Coord::new(5, 5)).is_err());
    assert!(engine.attempt_move(Some(Coord::new(0, 1)), Coord::new(3, 1)).is_err());
    assert_eq!(engine.move_count(), 0);

    // A legal step goes through.
    let report = engine
        .attempt_move(Some(Coord::new(2, 1)), Coord::new(3, 2))
        .unwrap();
    assert!(!report.turn_held);
    assert_eq!(report.result, None);
    assert_eq!(engine.state().to_move(), PlayerId::Second);
}

#[test]
fn test_intent_with_wrong_origin_kind_is_rejected() {
    let mut engine = Engine::new(EngineConfig::new(Variant::FiveInRow));

    // Placement games take no origin; an origin-ful intent matches nothing.
    let err = engine
        .attempt_move(Some(Coord::new(7, 7)), Coord::new(7, 8))
        .unwrap_err();
    assert_eq!(
        err,
        RulesError::IllegalMove {
            origin: Some(Coord::new(7, 7)),
            dest: Coord::new(7, 8),
        }
    );
}

#[test]
fn test_no_moves_accepted_after_game_over() {
    let mut engine = Engine::new(EngineConfig::new(Variant::FiveInRow));

    // First wins down column 0 on rows 0-4.
    for row in 0..4 {
        engine.attempt_move(None, Coord::new(row, 0)).unwrap();
        engine.attempt_move(None, Coord::new(row, 10)).unwrap();
    }
    let report = engine.attempt_move(None, Coord::new(4, 0)).unwrap();
    assert!(report.result.is_some());

    let err = engine.attempt_move(None, Coord::new(9, 9)).unwrap_err();
    assert!(matches!(err, RulesError::IllegalMove { .. }));
}

// =============================================================================
// Forced Continuation Through the Engine
// =============================================================================

#[test]
fn test_multi_capture_reports_held_turn() {
    // Drive a capture out of the standard layout with two quiet moves.
    let mut engine = Engine::new(EngineConfig::new(Variant::Checkers));

    let report = engine
        .attempt_move(Some(Coord::new(2, 3)), Coord::new(3, 4))
        .unwrap();
    assert!(!report.turn_held);

    let report = engine
        .attempt_move(Some(Coord::new(5, 2)), Coord::new(4, 3))
        .unwrap();
    assert!(!report.turn_held);

    // Now First at (3,4) must capture (4,3): mandatory capture filters
    // the legal set down to jumps.
    let legal = engine.legal_moves();
    assert!(legal.iter().all(|m| m.is_capture()));

    let report = engine
        .attempt_move(Some(Coord::new(3, 4)), Coord::new(5, 2))
        .unwrap();
    assert_eq!(report.mov.captures.as_slice(), &[Coord::new(4, 3)]);

    // Whether the turn was held depends on further captures from (5,2);
    // on the standard layout Second's (6,1) and (6,3) block the landings,
    // so the turn passes.
    assert!(!report.turn_held);
    assert_eq!(engine.state().to_move(), PlayerId::Second);
}

// =============================================================================
// Undo Through the Engine
// =============================================================================

#[test]
fn test_engine_undo_roundtrip() {
    let mut engine = Engine::new(EngineConfig::new(Variant::Checkers));
    let start = engine.state().clone();

    engine
        .attempt_move(Some(Coord::new(2, 1)), Coord::new(3, 2))
        .unwrap();
    engine
        .attempt_move(Some(Coord::new(5, 2)), Coord::new(4, 1))
        .unwrap();

    engine.undo().unwrap();
    engine.undo().unwrap();

    assert_eq!(engine.state(), &start);
    assert_eq!(engine.undo(), Err(RulesError::NoHistory));
}

// =============================================================================
// Automated Opponent
// =============================================================================

#[test]
fn test_ai_vs_ai_checkers_progresses() {
    let mut engine = Engine::new(
        EngineConfig::new(Variant::Checkers)
            .with_difficulty(Difficulty::Easy)
            .with_seed(7),
    );

    let mut moves_played = 0;
    while engine.result().is_none() && moves_played < 60 {
        let Some(mov) = engine.best_move() else { break };
        engine.attempt_move(mov.origin, mov.dest).unwrap();
        moves_played += 1;
    }

    assert!(moves_played > 0);
    // Piece count can only shrink from the initial 24.
    let pieces = engine.state().board.piece_count(PlayerId::First)
        + engine.state().board.piece_count(PlayerId::Second);
    assert!(pieces <= 24);
}

#[test]
fn test_ai_vs_ai_five_in_row_reaches_a_result_or_midgame() {
    let mut engine = Engine::new(
        EngineConfig::new(Variant::FiveInRow).with_difficulty(Difficulty::Easy),
    );

    let mut moves_played = 0;
    while engine.result().is_none() && moves_played < 20 {
        let Some(mov) = engine.best_move() else { break };
        let report = engine.attempt_move(mov.origin, mov.dest).unwrap();
        moves_played += 1;

        if report.result.is_some() {
            break;
        }
    }

    assert!(moves_played > 0);
    assert_eq!(engine.move_count(), moves_played);
    // The opening came from the center shortcut.
    assert_eq!(
        engine.state().history().next().unwrap().mov.dest,
        Coord::new(7, 7)
    );
}

#[test]
fn test_best_move_difficulty_changes_depth() {
    let mut engine = Engine::new(EngineConfig::new(Variant::Checkers));

    engine.best_move_at(Difficulty::Easy).unwrap();
    let easy_depth = engine.last_search_stats().unwrap().depth;

    engine.best_move_at(Difficulty::Hard).unwrap();
    let hard_depth = engine.last_search_stats().unwrap().depth;

    assert_eq!(easy_depth, 2);
    assert_eq!(hard_depth, 6);
}

// =============================================================================
// Custom Rule Sets
// =============================================================================

#[test]
fn test_engine_with_go_puzzle_setup() {
    let rules = GoCaptureRules::new()
        .with_stone(Coord::new(5, 5), PlayerId::Second)
        .with_stone(Coord::new(4, 5), PlayerId::First)
        .with_stone(Coord::new(6, 5), PlayerId::First)
        .with_stone(Coord::new(5, 4), PlayerId::First);

    let mut engine = Engine::with_rules(
        Box::new(rules),
        Box::new(GoCaptureEvaluator),
        EngineConfig::new(Variant::GoCapture),
    );

    let report = engine.attempt_move(None, Coord::new(5, 6)).unwrap();
    assert_eq!(report.mov.captures.as_slice(), &[Coord::new(5, 5)]);
    assert_eq!(engine.state().board.piece_count(PlayerId::Second), 0);

    // Host persistence inputs: result (always ongoing for go) + count.
    assert_eq!(engine.result(), None);
    assert_eq!(engine.move_count(), 1);
}
