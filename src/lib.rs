//! # rust-boardgame
//!
//! A two-player turn-based board game engine with alpha-beta search.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: The board, state, search, and engine
//!    never interpret game-specific concepts. Variants define their rules
//!    through the `RuleSet` and `Evaluate` traits, selected once at
//!    engine construction.
//!
//! 2. **Validated Moves Only**: A `Move` is applied only after the rule
//!    set confirms it belongs to the current legal set. Hosts hand the
//!    engine (origin, destination) intents, never hand-built moves.
//!
//! 3. **Snapshot Undo**: Every applied move snapshots the pre-move board,
//!    side to move, and forced-continuation marker, making undo an exact
//!    inverse even through multi-capture chains.
//!
//! ## Architecture
//!
//! - **Alpha-Beta Search**: Plain minimax with alpha-beta cutoffs over
//!   side-symmetric evaluators, center-first move ordering, a relevance
//!   filter for sparse placement boards, and an easy-mode random-move
//!   escape hatch.
//!
//! - **Single-Writer State**: The engine owns the one live `GameState`;
//!   search works on a scratch clone through the apply/undo pair.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, boards, moves, state, errors, RNG
//! - `rules`: The `RuleSet` trait, `Variant`, and `GameResult`
//! - `games`: Checkers, five-in-row, and go-capture implementations
//! - `search`: Alpha-beta search, evaluators, difficulty configuration
//! - `engine`: The host-facing orchestration API

pub mod core;
pub mod engine;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, GameRng, GameRngState, GameState, HistoryEntry, Move, MoveRecord,
    PieceKind, PlayerId, PlayerMap, RulesError,
};

pub use crate::rules::{GameResult, RuleSet, Variant};

pub use crate::games::checkers::{CheckersEvaluator, CheckersRules};
pub use crate::games::five_in_row::{FiveInRowEvaluator, FiveInRowRules, WinKind};
pub use crate::games::go_capture::{GoCaptureEvaluator, GoCaptureRules};

pub use crate::search::{AlphaBeta, Difficulty, Evaluate, SearchConfig, SearchStats};

pub use crate::engine::{Engine, EngineConfig, MoveReport};
