//! Engine orchestration: the host-facing API.
//!
//! ## Usage
//!
//! ```
//! use rust_boardgame::core::Coord;
//! use rust_boardgame::engine::{Engine, EngineConfig};
//! use rust_boardgame::rules::Variant;
//! use rust_boardgame::search::Difficulty;
//!
//! let mut engine = Engine::new(
//!     EngineConfig::new(Variant::FiveInRow).with_difficulty(Difficulty::Easy),
//! );
//!
//! // Human plays the center.
//! engine.attempt_move(None, Coord::new(7, 7)).unwrap();
//!
//! // Engine answers.
//! if let Some(reply) = engine.best_move() {
//!     engine.attempt_move(reply.origin, reply.dest).unwrap();
//! }
//!
//! assert_eq!(engine.move_count(), 2);
//! ```

pub mod config;
pub mod session;

pub use config::EngineConfig;
pub use session::{Engine, MoveReport};
