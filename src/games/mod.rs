//! Game variants: one module per rule set, each pairing a `RuleSet`
//! implementation with its `Evaluate` implementation.

pub mod checkers;
pub mod five_in_row;
pub mod go_capture;
