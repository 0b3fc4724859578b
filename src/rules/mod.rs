//! Rule set trait for game variants.
//!
//! Variants implement `RuleSet` to define their legal moves, how moves
//! modify state, and win/loss conditions. The engine and search operate
//! purely through this trait.

pub mod ruleset;

pub use ruleset::{GameResult, RuleSet, Variant};
