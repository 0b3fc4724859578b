//! Error taxonomy for the rules engine.
//!
//! Every error is a local, recoverable rejection: the operation that
//! produced it leaves the game state unchanged, and the host surfaces it
//! to the user. Nothing here is fatal to the process.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A rejected engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulesError {
    /// A coordinate outside the board grid was used for indexing.
    OutOfBounds { coord: Coord },

    /// The attempted move is not in the current legal set, or the game
    /// is already over.
    IllegalMove { origin: Option<Coord>, dest: Coord },

    /// Undo was requested with an empty move history.
    NoHistory,
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::OutOfBounds { coord } => {
                write!(f, "coordinate {coord} is outside the board")
            }
            RulesError::IllegalMove { origin, dest } => match origin {
                Some(origin) => write!(f, "illegal move from {origin} to {dest}"),
                None => write!(f, "illegal placement at {dest}"),
            },
            RulesError::NoHistory => write!(f, "no moves to undo"),
        }
    }
}

impl std::error::Error for RulesError {}
