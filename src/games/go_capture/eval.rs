//! Go capture position evaluator: stone and liberty differentials.
//!
//! Puzzle goals are host-defined, so this evaluator is intentionally
//! coarse: more stones and more liberties than the opponent is better.

use rustc_hash::FxHashSet;

use crate::core::{Coord, GameState, PlayerId, PlayerMap, ORTHOGONAL};
use crate::search::Evaluate;

const STONE: i64 = 10;
const LIBERTY: i64 = 1;

/// Stone-count and liberty-count differential evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoCaptureEvaluator;

impl Evaluate for GoCaptureEvaluator {
    fn score(&self, state: &GameState, for_player: PlayerId) -> i64 {
        let mut stones: PlayerMap<i64> = PlayerMap::with_value(0);
        let mut libs: PlayerMap<FxHashSet<Coord>> = PlayerMap::default();

        for (coord, cell) in state.board.cells() {
            let Some(owner) = cell.owner() else { continue };
            stones[owner] += 1;

            for (d_row, d_col) in ORTHOGONAL {
                let neighbor = coord.offset(d_row, d_col);
                if state.board.contains(neighbor) && state.board.get_or_empty(neighbor).is_empty()
                {
                    libs[owner].insert(neighbor);
                }
            }
        }

        let opponent = for_player.opponent();
        (stones[for_player] - stones[opponent]) * STONE
            + (libs[for_player].len() as i64 - libs[opponent].len() as i64) * LIBERTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::go_capture::GoCaptureRules;
    use crate::rules::RuleSet;

    #[test]
    fn test_empty_board_scores_zero() {
        let state = GoCaptureRules::new().initial_state();
        let eval = GoCaptureEvaluator;

        assert_eq!(eval.score(&state, PlayerId::First), 0);
    }

    #[test]
    fn test_stone_advantage() {
        let rules = GoCaptureRules::new()
            .with_stone(Coord::new(5, 5), PlayerId::First)
            .with_stone(Coord::new(3, 3), PlayerId::First)
            .with_stone(Coord::new(8, 8), PlayerId::Second);
        let state = rules.initial_state();

        let eval = GoCaptureEvaluator;
        assert!(eval.score(&state, PlayerId::First) > 0);
        assert!(eval.score(&state, PlayerId::Second) < 0);
    }

    #[test]
    fn test_surrounded_stone_scores_worse() {
        // Equal material, but white's stone is down to one liberty.
        let rules = GoCaptureRules::new()
            .with_stone(Coord::new(5, 5), PlayerId::Second)
            .with_stone(Coord::new(4, 5), PlayerId::First)
            .with_stone(Coord::new(6, 5), PlayerId::First)
            .with_stone(Coord::new(5, 4), PlayerId::First);
        let state = rules.initial_state();

        let free = GoCaptureRules::new()
            .with_stone(Coord::new(5, 5), PlayerId::Second)
            .with_stone(Coord::new(1, 1), PlayerId::First)
            .with_stone(Coord::new(1, 3), PlayerId::First)
            .with_stone(Coord::new(3, 1), PlayerId::First)
            .initial_state();

        let eval = GoCaptureEvaluator;
        assert!(
            eval.score(&state, PlayerId::Second) < eval.score(&free, PlayerId::Second)
        );
    }

    #[test]
    fn test_side_symmetry() {
        let rules = GoCaptureRules::new()
            .with_stone(Coord::new(5, 5), PlayerId::First)
            .with_stone(Coord::new(5, 6), PlayerId::Second)
            .with_stone(Coord::new(2, 2), PlayerId::First);
        let state = rules.initial_state();

        let eval = GoCaptureEvaluator;
        assert_eq!(
            eval.score(&state, PlayerId::First),
            -eval.score(&state, PlayerId::Second)
        );
    }
}
