//! Move representation: origin, destination, and side-effect payload.
//!
//! A `Move` is only meaningful if it was produced by a rule set's move
//! generation for the current state; rule sets re-validate membership
//! before applying one, so externally constructed moves cannot corrupt
//! the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use super::player::PlayerId;

/// A complete move.
///
/// Movement games (checkers) carry an origin; placement games (five-in-row,
/// go) have `origin: None`. The payload records the side effects the rule
/// set resolved at generation time:
/// - `captures`: cells whose pieces are removed when the move applies
/// - `promotes`: whether the moved piece is promoted on arrival
///
/// ## Example
///
/// ```
/// use rust_boardgame::core::{Coord, Move};
///
/// // A placement at (7, 7).
/// let place = Move::placement(Coord::new(7, 7));
/// assert!(place.origin.is_none());
/// assert!(!place.is_capture());
///
/// // A checkers jump from (2, 1) to (4, 3) capturing (3, 2).
/// let jump = Move::step(Coord::new(2, 1), Coord::new(4, 3))
///     .with_capture(Coord::new(3, 2));
/// assert!(jump.is_capture());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the piece moves from; `None` for placement games.
    pub origin: Option<Coord>,

    /// Cell the piece moves to or is placed on.
    pub dest: Coord,

    /// Cells captured by this move.
    /// SmallVec optimizes for the common 0-1 capture case without heap
    /// allocation; go group captures spill as needed.
    pub captures: SmallVec<[Coord; 4]>,

    /// Whether the moved piece promotes on arrival (checkers King).
    pub promotes: bool,
}

impl Move {
    /// Create a placement move (no origin).
    #[must_use]
    pub fn placement(dest: Coord) -> Self {
        Self {
            origin: None,
            dest,
            captures: SmallVec::new(),
            promotes: false,
        }
    }

    /// Create a movement from `origin` to `dest` with no side effects.
    #[must_use]
    pub fn step(origin: Coord, dest: Coord) -> Self {
        Self {
            origin: Some(origin),
            dest,
            captures: SmallVec::new(),
            promotes: false,
        }
    }

    /// Add a captured cell to the payload.
    #[must_use]
    pub fn with_capture(mut self, coord: Coord) -> Self {
        self.captures.push(coord);
        self
    }

    /// Add several captured cells to the payload.
    #[must_use]
    pub fn with_captures(mut self, coords: impl IntoIterator<Item = Coord>) -> Self {
        self.captures.extend(coords);
        self
    }

    /// Mark the move as promoting.
    #[must_use]
    pub fn with_promotion(mut self) -> Self {
        self.promotes = true;
        self
    }

    /// Check if this move captures anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// The cell whose legal-move set this move belongs to: the origin for
    /// movement games, the destination for placements.
    #[must_use]
    pub fn anchor(&self) -> Coord {
        self.origin.unwrap_or(self.dest)
    }
}

/// A move recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub mov: Move,

    /// 1-based position in the game (half-moves).
    pub move_number: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mov: Move, move_number: u32) -> Self {
        Self {
            player,
            mov,
            move_number,
        }
    }
}
