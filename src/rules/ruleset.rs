//! Rule set trait for game variants.
//!
//! Variants implement `RuleSet` to define:
//! - What moves are legal
//! - How moves modify state (captures, promotion, turn advance)
//! - Win/loss conditions
//!
//! The engine and search call into `RuleSet` but never interpret
//! variant-specific concepts directly.

use crate::core::{Coord, GameState, Move, RulesError, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// The supported game variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Variant {
    /// Diagonal movement and jumps with mandatory capture.
    Checkers,
    /// Place stones; five in a row wins.
    FiveInRow,
    /// Place stones; groups without liberties are captured.
    GoCapture,
}

impl Variant {
    /// Whether moves place new pieces rather than moving existing ones.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        matches!(self, Variant::FiveInRow | Variant::GoCapture)
    }
}

/// Rule set trait.
///
/// A rule set is a pure function set over `GameState`: it owns no mutable
/// state of its own, so one instance can serve the live game and every
/// search clone simultaneously.
///
/// ## Implementation Notes
///
/// - `moves_from`: Return empty for cells the side to move cannot act on
/// - `apply_move`: Must re-validate the move and reject with `IllegalMove`
/// - `is_terminal`: Return `None` if the game continues
pub trait RuleSet {
    /// Which variant this rule set implements.
    fn variant(&self) -> Variant;

    /// The starting position for a new game.
    fn initial_state(&self) -> GameState;

    /// Legal moves anchored at a cell.
    ///
    /// For movement games this is the move set of the piece at `coord`
    /// (empty if the cell is empty, enemy-owned, or locked out by a
    /// board-wide rule such as mandatory capture). For placement games it
    /// is the placement at `coord`, if legal.
    ///
    /// Never fails for a valid state; off-board coordinates yield an
    /// empty set.
    fn moves_from(&self, state: &GameState, coord: Coord) -> Vec<Move>;

    /// Apply a move: execute captures, promotions, and removals, update
    /// the forced-continuation marker, and advance or hold the turn.
    ///
    /// Fails with `IllegalMove` if `mov` is not in the legal set for the
    /// current state; the state is unchanged on failure.
    fn apply_move(&self, state: &mut GameState, mov: &Move) -> Result<(), RulesError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it
    /// continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate every legal move for the side to move.
    ///
    /// Default implementation unions `moves_from` over the board in
    /// row-major scan order. Callers must not rely on any quality
    /// ordering; search applies its own move ordering.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();

        for (coord, _) in state.board.cells() {
            moves.extend(self.moves_from(state, coord));
        }

        moves
    }
}
