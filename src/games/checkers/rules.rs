//! Checkers rules: diagonal steps, jump captures, mandatory capture,
//! multi-capture continuation, promotion.
//!
//! Board is 8x8 and play happens on the dark squares (`(row + col) % 2
//! == 1`). First starts on rows 0-2 and advances down the board; Second
//! starts on rows 5-7 and advances up. First moves first.

use crate::core::{Board, Cell, Coord, GameState, Move, PieceKind, PlayerId, RulesError, DIAGONAL};
use crate::rules::{GameResult, RuleSet, Variant};

const SIZE: u16 = 8;

/// Checkers rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersRules;

impl CheckersRules {
    /// Create the standard checkers rule set.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Row a player's men promote on.
    fn promotion_row(player: PlayerId) -> i16 {
        match player {
            PlayerId::First => SIZE as i16 - 1,
            PlayerId::Second => 0,
        }
    }

    /// Diagonal directions a piece may move in: men forward only, kings
    /// all four.
    fn directions(player: PlayerId, kind: PieceKind) -> &'static [(i16, i16)] {
        match kind {
            PieceKind::King => &DIAGONAL,
            _ => match player {
                PlayerId::First => &[(1, -1), (1, 1)],
                PlayerId::Second => &[(-1, -1), (-1, 1)],
            },
        }
    }

    fn promotes(player: PlayerId, kind: PieceKind, dest: Coord) -> bool {
        kind == PieceKind::Man && dest.row == Self::promotion_row(player)
    }

    /// Single-step moves into adjacent empty diagonals.
    fn basic_moves(&self, board: &Board, origin: Coord, player: PlayerId, kind: PieceKind) -> Vec<Move> {
        let mut moves = Vec::new();

        for &(d_row, d_col) in Self::directions(player, kind) {
            let dest = origin.offset(d_row, d_col);
            if board.contains(dest) && board.get_or_empty(dest).is_empty() {
                let mut mov = Move::step(origin, dest);
                if Self::promotes(player, kind, dest) {
                    mov = mov.with_promotion();
                }
                moves.push(mov);
            }
        }

        moves
    }

    /// Jumps over an adjacent enemy piece onto the empty cell beyond it.
    fn capture_moves(&self, board: &Board, origin: Coord, player: PlayerId, kind: PieceKind) -> Vec<Move> {
        let mut moves = Vec::new();

        for &(d_row, d_col) in Self::directions(player, kind) {
            let over = origin.offset(d_row, d_col);
            let dest = origin.offset(d_row * 2, d_col * 2);

            if !board.contains(over) || !board.contains(dest) {
                continue;
            }

            let jumped = board.get_or_empty(over);
            if jumped.owner() == Some(player.opponent()) && board.get_or_empty(dest).is_empty() {
                let mut mov = Move::step(origin, dest).with_capture(over);
                if Self::promotes(player, kind, dest) {
                    mov = mov.with_promotion();
                }
                moves.push(mov);
            }
        }

        moves
    }

    /// Whether any piece of `player` has a capture available.
    fn side_has_capture(&self, state: &GameState, player: PlayerId) -> bool {
        state.board.cells().any(|(coord, cell)| match cell {
            Cell::Occupied(owner, kind) if owner == player => {
                !self.capture_moves(&state.board, coord, player, kind).is_empty()
            }
            _ => false,
        })
    }
}

impl RuleSet for CheckersRules {
    fn variant(&self) -> Variant {
        Variant::Checkers
    }

    fn initial_state(&self) -> GameState {
        let mut board = Board::new(SIZE, SIZE);

        for row in 0..SIZE as i16 {
            for col in 0..SIZE as i16 {
                if (row + col) % 2 != 1 {
                    continue;
                }
                let cell = if row < 3 {
                    Cell::Occupied(PlayerId::First, PieceKind::Man)
                } else if row >= SIZE as i16 - 3 {
                    Cell::Occupied(PlayerId::Second, PieceKind::Man)
                } else {
                    continue;
                };
                // In-range by construction.
                let _ = board.set(Coord::new(row, col), cell);
            }
        }

        GameState::new(board, PlayerId::First)
    }

    fn moves_from(&self, state: &GameState, coord: Coord) -> Vec<Move> {
        let player = state.to_move();
        let (owner, kind) = match state.board.get_or_empty(coord) {
            Cell::Occupied(owner, kind) => (owner, kind),
            Cell::Empty => return vec![],
        };
        if owner != player {
            return vec![];
        }

        // A multi-capture in progress locks every other piece out.
        if let Some(forced) = state.forced_from() {
            if coord != forced {
                return vec![];
            }
            return self.capture_moves(&state.board, coord, player, kind);
        }

        let captures = self.capture_moves(&state.board, coord, player, kind);
        if !captures.is_empty() {
            return captures;
        }

        // Mandatory capture: a capture anywhere on the board makes
        // non-capture moves illegal for the whole side.
        if self.side_has_capture(state, player) {
            return vec![];
        }

        self.basic_moves(&state.board, coord, player, kind)
    }

    fn apply_move(&self, state: &mut GameState, mov: &Move) -> Result<(), RulesError> {
        if !self.moves_from(state, mov.anchor()).contains(mov) {
            return Err(RulesError::IllegalMove {
                origin: mov.origin,
                dest: mov.dest,
            });
        }

        let player = state.to_move();
        let origin = mov.anchor();
        let kind = match state.board.get(origin)? {
            Cell::Occupied(_, kind) => kind,
            Cell::Empty => {
                return Err(RulesError::IllegalMove {
                    origin: mov.origin,
                    dest: mov.dest,
                })
            }
        };

        state.record_move(mov.clone());

        let kind_after = if mov.promotes { PieceKind::King } else { kind };
        state.board.set(origin, Cell::Empty)?;
        state.board.set(mov.dest, Cell::Occupied(player, kind_after))?;

        for &captured in &mov.captures {
            state.board.set(captured, Cell::Empty)?;
        }

        // Continuation: the capturing piece must keep jumping if it can.
        // The check runs after promotion, so a fresh king may continue
        // backward.
        let continues = mov.is_capture()
            && !self
                .capture_moves(&state.board, mov.dest, player, kind_after)
                .is_empty();

        if continues {
            state.set_forced_from(Some(mov.dest));
        } else {
            state.set_forced_from(None);
            state.set_to_move(player.opponent());
        }

        Ok(())
    }

    /// Override of the scan-and-union default: resolves the
    /// mandatory-capture rule once for the whole board instead of once
    /// per piece.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let player = state.to_move();

        if let Some(forced) = state.forced_from() {
            return match state.board.get_or_empty(forced) {
                Cell::Occupied(owner, kind) if owner == player => {
                    self.capture_moves(&state.board, forced, player, kind)
                }
                _ => vec![],
            };
        }

        let mut captures = Vec::new();
        let mut steps = Vec::new();

        for (coord, cell) in state.board.cells() {
            let Cell::Occupied(owner, kind) = cell else { continue };
            if owner != player {
                continue;
            }

            let piece_captures = self.capture_moves(&state.board, coord, player, kind);
            if !piece_captures.is_empty() {
                captures.extend(piece_captures);
            } else if captures.is_empty() {
                steps.extend(self.basic_moves(&state.board, coord, player, kind));
            }
        }

        if captures.is_empty() {
            steps
        } else {
            captures
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.board.piece_count(PlayerId::First) == 0 {
            return Some(GameResult::Winner(PlayerId::Second));
        }
        if state.board.piece_count(PlayerId::Second) == 0 {
            return Some(GameResult::Winner(PlayerId::First));
        }

        // A side that cannot move loses.
        if self.legal_moves(state).is_empty() {
            return Some(GameResult::Winner(state.to_move().opponent()));
        }

        None
    }
}
