//! Five-in-row position evaluator.
//!
//! For every stone and each of the four line directions, the evaluator
//! examines the five-cell window centered on the stone: the more
//! same-color stones in the window the better, doubled when the window
//! holds no enemy stone and worthless once it holds two. A small
//! center-distance bonus nudges play toward the middle of the board.

use crate::core::{Coord, GameState, PlayerId, LINES};
use crate::search::Evaluate;

/// Window score by same-color stone count (index = count).
/// Each level dwarfs the one below it and the center bonus, so a longer
/// run always outranks positional shuffling.
const RUN_SCORES: [i64; 6] = [0, 0, 10, 100, 1_000, 100_000];

/// Line-pattern evaluator with a center-distance bonus.
#[derive(Clone, Copy, Debug, Default)]
pub struct FiveInRowEvaluator;

impl FiveInRowEvaluator {
    /// Score the five-cell window centered on `coord` along `dir` for the
    /// stone's owner.
    fn window_score(state: &GameState, coord: Coord, owner: PlayerId, dir: (i16, i16)) -> i64 {
        let mut own = 0usize;
        let mut enemy = 0usize;

        for i in -2i16..=2 {
            let cell = state.board.get_or_empty(coord.offset(dir.0 * i, dir.1 * i));
            match cell.owner() {
                Some(player) if player == owner => own += 1,
                Some(_) => enemy += 1,
                None => {}
            }
        }

        if enemy >= 2 {
            return 0;
        }

        let multiplier = if enemy == 0 { 2 } else { 1 };
        RUN_SCORES[own.min(5)] * multiplier
    }
}

impl Evaluate for FiveInRowEvaluator {
    fn score(&self, state: &GameState, for_player: PlayerId) -> i64 {
        let center = state.board.center();
        let max_center_bonus =
            (state.board.height() as i64 + state.board.width() as i64) / 2 - 1;

        let mut total = 0i64;

        for (coord, cell) in state.board.cells() {
            let Some(owner) = cell.owner() else { continue };

            let mut value = 0i64;
            for dir in LINES {
                value += Self::window_score(state, coord, owner, dir);
            }
            value += max_center_bonus - coord.manhattan(center) as i64;

            total += if owner == PlayerId::First { value } else { -value };
        }

        if for_player == PlayerId::First {
            total
        } else {
            -total
        }
    }
}
