//! Game state: board, side to move, forced continuation, move history.
//!
//! ## Undo model
//!
//! Every applied move pushes a history entry carrying a full snapshot of
//! the pre-move board, side to move, and forced-continuation marker.
//! Undo restores the snapshot instead of replaying the move in reverse;
//! reversing captures by hand is error-prone and snapshots make undo a
//! provable inverse.
//!
//! Uses `im::Vector` for the history so cloning a state for search is
//! cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::Coord;
use super::error::RulesError;
use super::moves::{Move, MoveRecord};
use super::player::PlayerId;

/// One history entry: the move made plus the snapshot to restore on undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The recorded move.
    pub record: MoveRecord,

    board_before: Board,
    to_move_before: PlayerId,
    forced_before: Option<Coord>,
}

/// The complete state of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current board position.
    pub board: Board,

    to_move: PlayerId,
    forced_from: Option<Coord>,
    history: Vector<HistoryEntry>,
}

impl GameState {
    /// Create a new state from an initial board layout and starting player.
    #[must_use]
    pub fn new(board: Board, to_move: PlayerId) -> Self {
        Self {
            board,
            to_move,
            forced_from: None,
            history: Vector::new(),
        }
    }

    /// The side to move.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Set the side to move.
    ///
    /// Called by rule sets during move application; hosts should not
    /// drive turns directly.
    pub fn set_to_move(&mut self, player: PlayerId) {
        self.to_move = player;
    }

    /// The forced-continuation cell, if a multi-capture sequence is in
    /// progress: only the piece on this cell may move, and the turn has
    /// not passed.
    #[must_use]
    pub fn forced_from(&self) -> Option<Coord> {
        self.forced_from
    }

    /// Set or clear the forced-continuation marker.
    pub fn set_forced_from(&mut self, coord: Option<Coord>) {
        self.forced_from = coord;
    }

    /// Number of half-moves played.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last().map(|entry| &entry.record)
    }

    /// Iterate over the recorded moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter().map(|entry| &entry.record)
    }

    /// Record a move about to be applied, snapshotting the current state.
    ///
    /// Rule sets call this before mutating the board so the entry captures
    /// the pre-move position.
    pub fn record_move(&mut self, mov: Move) {
        let record = MoveRecord::new(self.to_move, mov, self.move_count() + 1);
        self.history.push_back(HistoryEntry {
            record,
            board_before: self.board.clone(),
            to_move_before: self.to_move,
            forced_before: self.forced_from,
        });
    }

    /// Undo the last move, restoring the pre-move snapshot.
    ///
    /// Fails with `NoHistory` if no move has been made.
    pub fn undo(&mut self) -> Result<(), RulesError> {
        let entry = self.history.pop_back().ok_or(RulesError::NoHistory)?;

        self.board = entry.board_before;
        self.to_move = entry.to_move_before;
        self.forced_from = entry.forced_before;

        Ok(())
    }
}
