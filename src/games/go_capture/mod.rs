//! Go capture: stone placement with group liberties on an 11x11 board.
//!
//! - Every empty cell is a legal placement, except suicide
//! - An enemy group left with zero liberties is removed whole; several
//!   groups can fall to one placement
//! - No built-in terminal check: puzzle goals live in the host, served
//!   by the group and liberty queries this module exposes

mod eval;
mod rules;

pub use eval::GoCaptureEvaluator;
pub use rules::GoCaptureRules;
