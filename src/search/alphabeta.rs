//! Minimax search with alpha-beta pruning.
//!
//! The searcher is variant-agnostic: it sees the game only through
//! `RuleSet` and `Evaluate`. It owns transient state only (RNG, stats,
//! and the recursion over a scratch clone of the caller's state) and is
//! meant to live for a single `best_move` call.
//!
//! Backtracking uses the rule set's apply/undo pair on one scratch state
//! rather than cloning per recursion frame; undo restores a full
//! snapshot, so the pairing is exact.

use std::time::Instant;

use crate::core::{Coord, GameRng, GameState, Move, PlayerId};
use crate::rules::RuleSet;

use super::config::SearchConfig;
use super::evaluate::Evaluate;
use super::stats::SearchStats;

/// Alpha-beta search over a rule set and evaluator.
pub struct AlphaBeta<'a> {
    rules: &'a dyn RuleSet,
    eval: &'a dyn Evaluate,
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl<'a> AlphaBeta<'a> {
    /// Create a new search context.
    pub fn new(rules: &'a dyn RuleSet, eval: &'a dyn Evaluate, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            rules,
            eval,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Use an externally forked RNG instead of one seeded from the config.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Find the best move for the side to move, without applying it.
    ///
    /// Returns `None` when the game is over or no legal move exists.
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.depth = self.config.depth;

        if self.rules.is_terminal(state).is_some() {
            return None;
        }

        // The relevance filter has nothing to anchor on an empty board;
        // open at the center.
        if self.config.relevance_radius.is_some() && state.board.is_empty() {
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return Some(Move::placement(state.board.center()));
        }

        let legal = self.rules.legal_moves(state);
        if legal.is_empty() {
            return None;
        }

        // Easy-mode escape hatch: skip the search entirely.
        if self.config.noise_probability > 0.0
            && self.rng.gen_bool(self.config.noise_probability)
        {
            self.stats.random_moves += 1;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return self.rng.choose(&legal).cloned();
        }

        let candidates = self.order_moves(state, legal);
        let maximizing = state.to_move();
        let mut scratch = state.clone();

        let mut best: Option<Move> = None;
        let mut best_score = i64::MIN;
        let mut alpha = i64::MIN;

        for mov in candidates {
            if self.rules.apply_move(&mut scratch, &mov).is_err() {
                // Generated moves must be applicable; skip a defective one.
                continue;
            }
            let score = self.search(
                &mut scratch,
                self.config.depth.saturating_sub(1),
                alpha,
                i64::MAX,
                maximizing,
            );
            let undone = scratch.undo();
            debug_assert!(undone.is_ok(), "undo must pair with a successful apply");

            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(mov);
            }
            alpha = alpha.max(score);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Statistics from the most recent `best_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn search(
        &mut self,
        state: &mut GameState,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: PlayerId,
    ) -> i64 {
        self.stats.nodes_visited += 1;

        if depth == 0 || self.rules.is_terminal(state).is_some() {
            self.stats.leaf_evals += 1;
            return self.eval.score(state, maximizing);
        }

        let legal = self.rules.legal_moves(state);
        if legal.is_empty() {
            // An empty legal set at a non-terminal node is a rule-set
            // defect; degrade to a leaf evaluation.
            self.stats.leaf_evals += 1;
            return self.eval.score(state, maximizing);
        }
        let moves = self.order_moves(state, legal);

        let is_max = state.to_move() == maximizing;
        let mut best = if is_max { i64::MIN } else { i64::MAX };

        for mov in moves {
            if self.rules.apply_move(state, &mov).is_err() {
                continue;
            }
            let score = self.search(state, depth - 1, alpha, beta, maximizing);
            let undone = state.undo();
            debug_assert!(undone.is_ok(), "undo must pair with a successful apply");

            if is_max {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Apply the relevance filter, then sort by distance to the board
    /// center, closest first. Ordering affects pruning, never the value.
    fn order_moves(&self, state: &GameState, mut moves: Vec<Move>) -> Vec<Move> {
        if let Some(radius) = self.config.relevance_radius {
            let radius = radius as i16;
            let stones: Vec<Coord> = state
                .board
                .cells()
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(coord, _)| coord)
                .collect();

            if !stones.is_empty() {
                let near: Vec<Move> = moves
                    .iter()
                    .filter(|mov| stones.iter().any(|s| mov.dest.chebyshev(*s) <= radius))
                    .cloned()
                    .collect();
                // Never filter down to nothing: a packed neighborhood
                // falls back to the full legal set.
                if !near.is_empty() {
                    moves = near;
                }
            }
        }

        let center = state.board.center();
        moves.sort_by_key(|mov| mov.dest.manhattan(center));
        moves
    }
}
