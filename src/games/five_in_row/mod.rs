//! Five-in-row: free stone placement on a 15x15 board.
//!
//! - Every empty cell is a legal placement
//! - Five consecutive same-color stones in any direction win
//! - A full board with no winner is a draw
//! - An optional cross rule reports five-plus-crossing-three wins as
//!   their own kind for host display

mod eval;
mod rules;

pub use eval::FiveInRowEvaluator;
pub use rules::{FiveInRowRules, WinKind};
