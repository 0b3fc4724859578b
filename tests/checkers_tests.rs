//! Checkers integration tests: rule soundness, mandatory capture,
//! multi-capture chains, and undo.

use rust_boardgame::core::{Cell, Coord, Move, PieceKind, PlayerId};
use rust_boardgame::games::checkers::CheckersRules;
use rust_boardgame::rules::{GameResult, RuleSet};

fn man(player: PlayerId) -> Cell {
    Cell::Occupied(player, PieceKind::Man)
}

// =============================================================================
// Capture Resolution from the Standard Layout
// =============================================================================

#[test]
fn test_capture_scenario_from_standard_layout() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();

    // Standard layout, plus an enemy man at (3,2) with (4,3) empty.
    state.board.set(Coord::new(3, 2), man(PlayerId::Second)).unwrap();

    let moves = rules.moves_from(&state, Coord::new(2, 1));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].dest, Coord::new(4, 3));
    assert_eq!(moves[0].captures.as_slice(), &[Coord::new(3, 2)]);

    // Mandatory capture: pieces without a capture are locked.
    assert!(rules.moves_from(&state, Coord::new(2, 5)).is_empty());
    assert!(rules.moves_from(&state, Coord::new(2, 7)).is_empty());

    let mov = moves[0].clone();
    rules.apply_move(&mut state, &mov).unwrap();

    // The jumped piece is gone and the turn passed: no continuation was
    // available from (4,3).
    assert!(state.board.get(Coord::new(3, 2)).unwrap().is_empty());
    assert_eq!(state.to_move(), PlayerId::Second);
    assert_eq!(state.forced_from(), None);
}

// =============================================================================
// Move Legality Soundness
// =============================================================================

#[test]
fn test_applying_any_legal_move_is_sound() {
    let rules = CheckersRules::new();
    let state = rules.initial_state();

    for mov in rules.legal_moves(&state) {
        let mut next = state.clone();
        rules.apply_move(&mut next, &mov).unwrap();

        // No pieces created; captures only ever remove.
        assert!(
            next.board.piece_count(PlayerId::First) <= state.board.piece_count(PlayerId::First)
        );
        assert!(
            next.board.piece_count(PlayerId::Second)
                <= state.board.piece_count(PlayerId::Second)
        );

        // The moved piece actually moved.
        let origin = mov.origin.expect("checkers moves have origins");
        assert!(next.board.get(origin).unwrap().is_empty());
        assert_eq!(
            next.board.get(mov.dest).unwrap().owner(),
            Some(PlayerId::First)
        );

        // A single step moves exactly one diagonal.
        assert_eq!((mov.dest.row - origin.row).abs(), 1);
        assert_eq!((mov.dest.col - origin.col).abs(), 1);
    }
}

#[test]
fn test_mandatory_capture_invariant() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();
    state.board.set(Coord::new(3, 2), man(PlayerId::Second)).unwrap();

    // A capture exists somewhere, so the legal set is captures only.
    let legal = rules.legal_moves(&state);
    assert!(!legal.is_empty());
    assert!(legal.iter().all(Move::is_capture));
}

// =============================================================================
// Multi-Capture Chains
// =============================================================================

#[test]
fn test_double_jump_holds_turn_then_passes() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();

    // Give (2,1) a two-jump ladder: enemies at (3,2) and (5,4) with
    // empty landings at (4,3) and (6,5).
    state.board.set(Coord::new(3, 2), man(PlayerId::Second)).unwrap();
    state.board.set(Coord::new(5, 4), man(PlayerId::Second)).unwrap();
    state.board.set(Coord::new(6, 5), Cell::Empty).unwrap();

    let first = rules.moves_from(&state, Coord::new(2, 1))[0].clone();
    rules.apply_move(&mut state, &first).unwrap();

    assert_eq!(state.to_move(), PlayerId::First);
    assert_eq!(state.forced_from(), Some(Coord::new(4, 3)));

    // During the chain, every other piece is locked out.
    let legal = rules.legal_moves(&state);
    assert!(legal.iter().all(|m| m.origin == Some(Coord::new(4, 3))));
    assert!(legal.iter().all(Move::is_capture));

    let second = legal[0].clone();
    assert_eq!(second.dest, Coord::new(6, 5));
    rules.apply_move(&mut state, &second).unwrap();

    assert_eq!(state.forced_from(), None);
    assert_eq!(state.to_move(), PlayerId::Second);
}

#[test]
fn test_undo_through_multi_capture_chain() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();
    state.board.set(Coord::new(3, 2), man(PlayerId::Second)).unwrap();
    state.board.set(Coord::new(5, 4), man(PlayerId::Second)).unwrap();
    state.board.set(Coord::new(6, 5), Cell::Empty).unwrap();

    let start = state.clone();

    let first = rules.moves_from(&state, Coord::new(2, 1))[0].clone();
    rules.apply_move(&mut state, &first).unwrap();
    let mid = state.clone();

    let second = rules.legal_moves(&state)[0].clone();
    rules.apply_move(&mut state, &second).unwrap();

    // Unwind: each undo restores the exact prior state, including the
    // forced-continuation marker.
    state.undo().unwrap();
    assert_eq!(state, mid);
    assert_eq!(state.forced_from(), Some(Coord::new(4, 3)));

    state.undo().unwrap();
    assert_eq!(state, start);
    assert_eq!(state.forced_from(), None);
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_promotion_and_king_mobility() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();

    // Clear a path and put a First man one step from promotion.
    for col in 0..8 {
        for row in 3..8 {
            state.board.set(Coord::new(row, col), Cell::Empty).unwrap();
        }
    }
    state.board.set(Coord::new(6, 3), man(PlayerId::First)).unwrap();
    state.board.set(Coord::new(4, 1), man(PlayerId::Second)).unwrap();

    let moves = rules.moves_from(&state, Coord::new(6, 3));
    let promoting = moves.iter().find(|m| m.dest == Coord::new(7, 4)).unwrap();
    assert!(promoting.promotes);

    let mov = promoting.clone();
    rules.apply_move(&mut state, &mov).unwrap();
    assert_eq!(
        state.board.get(Coord::new(7, 4)).unwrap().kind(),
        Some(PieceKind::King)
    );

    // After Second replies, the new king can step backward.
    let reply = rules.moves_from(&state, Coord::new(4, 1))[0].clone();
    rules.apply_move(&mut state, &reply).unwrap();

    let king_moves = rules.moves_from(&state, Coord::new(7, 4));
    assert!(king_moves.iter().any(|m| m.dest.row == 6));
}

// =============================================================================
// Terminal Detection
// =============================================================================

#[test]
fn test_capturing_last_piece_wins() {
    let rules = CheckersRules::new();
    let mut state = rules.initial_state();

    // Strip the board down to a single forced exchange.
    for (coord, _) in state.board.clone().cells() {
        state.board.set(coord, Cell::Empty).unwrap();
    }
    state.board.set(Coord::new(2, 1), man(PlayerId::First)).unwrap();
    state.board.set(Coord::new(3, 2), man(PlayerId::Second)).unwrap();

    let mov = rules.moves_from(&state, Coord::new(2, 1))[0].clone();
    rules.apply_move(&mut state, &mov).unwrap();

    assert_eq!(
        rules.is_terminal(&state),
        Some(GameResult::Winner(PlayerId::First))
    );
}
