//! Adversarial search: minimax with alpha-beta pruning.
//!
//! ## Overview
//!
//! The search is variant-agnostic and operates purely over `RuleSet` and
//! `Evaluate`. Key behaviors:
//!
//! - **Plain alpha-beta** with a fixed maximizing player; evaluators are
//!   side-symmetric so no negamax adjustment is needed
//! - **Move ordering** by distance to the board center (pruning quality
//!   only, never the chosen value)
//! - **Relevance filter** for sparse placement boards: candidates far
//!   from every existing stone are excluded before search
//! - **Easy-mode noise**: a configured probability of playing a uniform
//!   random legal move instead of searching
//!
//! ## Usage
//!
//! ```
//! use rust_boardgame::games::five_in_row::{FiveInRowEvaluator, FiveInRowRules};
//! use rust_boardgame::rules::RuleSet;
//! use rust_boardgame::search::{AlphaBeta, Difficulty, SearchConfig};
//!
//! let rules = FiveInRowRules::new();
//! let eval = FiveInRowEvaluator;
//! let state = rules.initial_state();
//!
//! let config = SearchConfig::for_difficulty(Difficulty::Medium).with_relevance_radius(2);
//! let mut search = AlphaBeta::new(&rules, &eval, config);
//!
//! if let Some(best) = search.best_move(&state) {
//!     println!("Best placement: {}", best.dest);
//! }
//! ```

pub mod alphabeta;
pub mod config;
pub mod evaluate;
pub mod stats;

pub use alphabeta::AlphaBeta;
pub use config::{Difficulty, SearchConfig};
pub use evaluate::Evaluate;
pub use stats::SearchStats;
