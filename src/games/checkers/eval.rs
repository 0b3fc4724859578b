//! Checkers position evaluator: material plus advancement.

use crate::core::{Cell, GameState, PieceKind, PlayerId};
use crate::search::Evaluate;

/// Material value of a man. A king is worth 1.5 men; both values are
/// scaled by 2 to stay in integers.
const MAN: i64 = 20;
const KING: i64 = 30;

/// Per-row bonus for a man advancing toward its promotion row.
const ADVANCE: i64 = 1;

/// Material-count evaluator with a small positional bonus for men
/// approaching promotion.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersEvaluator;

impl CheckersEvaluator {
    fn piece_value(owner: PlayerId, kind: PieceKind, row: i16, height: i16) -> i64 {
        match kind {
            PieceKind::King => KING,
            _ => {
                let advanced = match owner {
                    PlayerId::First => row,
                    PlayerId::Second => height - 1 - row,
                } as i64;
                MAN + advanced * ADVANCE
            }
        }
    }
}

impl Evaluate for CheckersEvaluator {
    fn score(&self, state: &GameState, for_player: PlayerId) -> i64 {
        let height = state.board.height() as i16;
        let mut total = 0i64;

        for (coord, cell) in state.board.cells() {
            if let Cell::Occupied(owner, kind) = cell {
                let value = Self::piece_value(owner, kind, coord.row, height);
                total += if owner == PlayerId::First { value } else { -value };
            }
        }

        if for_player == PlayerId::First {
            total
        } else {
            -total
        }
    }
}
