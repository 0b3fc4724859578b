//! Engine: the single live game and its public operations.
//!
//! The engine owns the one mutable `GameState`, the rule set and
//! evaluator chosen at construction, and the RNG. All operations run to
//! completion on the caller's thread; a host that wants a responsive UI
//! during deep searches runs `best_move` on its own worker and applies
//! the result afterward.

use crate::core::{Coord, GameRng, GameState, Move, RulesError};
use crate::games::checkers::{CheckersEvaluator, CheckersRules};
use crate::games::five_in_row::{FiveInRowEvaluator, FiveInRowRules};
use crate::games::go_capture::{GoCaptureEvaluator, GoCaptureRules};
use crate::rules::{GameResult, RuleSet, Variant};
use crate::search::{AlphaBeta, Difficulty, Evaluate, SearchConfig, SearchStats};

use super::config::EngineConfig;

/// Chebyshev radius of the relevance filter on the 15x15 placement board.
const RELEVANCE_RADIUS: u8 = 2;

/// What happened when a move was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The move that was applied, with its resolved payload.
    pub mov: Move,

    /// True when the mover keeps the turn (multi-capture continuation).
    pub turn_held: bool,

    /// The game result, if this move ended the game.
    pub result: Option<GameResult>,
}

/// A live game: state, rules, evaluator, and the operations a host needs.
pub struct Engine {
    rules: Box<dyn RuleSet>,
    eval: Box<dyn Evaluate>,
    config: EngineConfig,
    state: GameState,
    rng: GameRng,
    last_stats: Option<SearchStats>,
}

impl Engine {
    /// Create an engine for the configured variant.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let (rules, eval): (Box<dyn RuleSet>, Box<dyn Evaluate>) = match config.variant {
            Variant::Checkers => (
                Box::new(CheckersRules::new()),
                Box::new(CheckersEvaluator::default()),
            ),
            Variant::FiveInRow => (
                Box::new(FiveInRowRules::new()),
                Box::new(FiveInRowEvaluator::default()),
            ),
            Variant::GoCapture => (
                Box::new(GoCaptureRules::new()),
                Box::new(GoCaptureEvaluator::default()),
            ),
        };

        Self::with_rules(rules, eval, config)
    }

    /// Create an engine from an explicit rule set and evaluator.
    ///
    /// Used for customized variants (sized boards, go puzzle setups).
    #[must_use]
    pub fn with_rules(
        rules: Box<dyn RuleSet>,
        eval: Box<dyn Evaluate>,
        config: EngineConfig,
    ) -> Self {
        let state = rules.initial_state();
        let rng = GameRng::new(config.seed);

        Self {
            rules,
            eval,
            config,
            state,
            rng,
            last_stats: None,
        }
    }

    /// Reset to the variant's initial layout, clearing all history.
    pub fn new_game(&mut self) {
        self.state = self.rules.initial_state();
        self.last_stats = None;
    }

    /// The current game state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The active variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// The game result, or `None` while the game is ongoing.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Number of half-moves played.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.state)
    }

    /// Legal moves anchored at a cell, for selection highlighting.
    #[must_use]
    pub fn moves_from(&self, coord: Coord) -> Vec<Move> {
        self.rules.moves_from(&self.state, coord)
    }

    /// Attempt the move described by an (origin, destination) intent.
    ///
    /// The intent is matched against the generated legal set; an
    /// unmatched intent or a finished game is rejected with
    /// `IllegalMove` and the state stays unchanged.
    pub fn attempt_move(
        &mut self,
        origin: Option<Coord>,
        dest: Coord,
    ) -> Result<MoveReport, RulesError> {
        let rejected = RulesError::IllegalMove { origin, dest };

        if self.result().is_some() {
            return Err(rejected);
        }

        let mov = self
            .rules
            .legal_moves(&self.state)
            .into_iter()
            .find(|m| m.origin == origin && m.dest == dest)
            .ok_or(rejected)?;

        self.rules.apply_move(&mut self.state, &mov)?;

        Ok(MoveReport {
            turn_held: self.state.forced_from().is_some(),
            result: self.rules.is_terminal(&self.state),
            mov,
        })
    }

    /// Undo the last move. Fails with `NoHistory` when nothing was played.
    pub fn undo(&mut self) -> Result<(), RulesError> {
        self.state.undo()
    }

    /// Find the best move at the configured difficulty, without applying
    /// it. Apply through `attempt_move`.
    pub fn best_move(&mut self) -> Option<Move> {
        self.best_move_at(self.config.difficulty)
    }

    /// Find the best move at an explicit difficulty, without applying it.
    pub fn best_move_at(&mut self, difficulty: Difficulty) -> Option<Move> {
        let mut search_config = SearchConfig::for_difficulty(difficulty);
        if let Some(noise) = self.config.noise_probability {
            search_config = search_config.with_noise(noise);
        }
        if self.rules.variant() == Variant::FiveInRow {
            search_config = search_config.with_relevance_radius(RELEVANCE_RADIUS);
        }

        let rng = self.rng.fork();
        let mut search =
            AlphaBeta::new(self.rules.as_ref(), self.eval.as_ref(), search_config).with_rng(rng);

        let mov = search.best_move(&self.state);
        self.last_stats = Some(search.stats().clone());
        mov
    }

    /// Statistics from the most recent `best_move` call.
    #[must_use]
    pub fn last_search_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}
