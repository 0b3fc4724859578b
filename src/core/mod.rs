//! Core engine types: players, coordinates, boards, moves, state, RNG.
//!
//! This module contains the fundamental building blocks that are
//! variant-agnostic. Game variants build on these via `RuleSet` rather
//! than modifying the core.

pub mod board;
pub mod coord;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Cell, PieceKind};
pub use coord::{Coord, DIAGONAL, LINES, ORTHOGONAL};
pub use error::RulesError;
pub use moves::{Move, MoveRecord};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, HistoryEntry};
