//! Checkers: diagonal movement and jump captures on an 8x8 board.
//!
//! - Men step one diagonal forward; kings step in all four diagonals
//! - A capture jumps one adjacent enemy onto the empty cell beyond it
//! - Captures are mandatory whenever one is available
//! - A capturing piece that can jump again keeps the turn (forced
//!   continuation), and only that piece may move
//! - Reaching the far row promotes a man to king
//! - A side with no pieces or no legal moves loses

mod eval;
mod rules;

pub use eval::CheckersEvaluator;
pub use rules::CheckersRules;
