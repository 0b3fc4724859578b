//! Five-in-row rules: free placement, win by a run of five.
//!
//! Win detection scans only through the last-placed stone: a new five
//! must pass through the newest stone, so nothing else can have changed.

use crate::core::{Board, Cell, Coord, GameState, Move, PieceKind, PlayerId, RulesError, LINES};
use crate::rules::{GameResult, RuleSet, Variant};

const DEFAULT_SIZE: u16 = 15;
const WIN_RUN: usize = 5;
const CROSS_RUN: usize = 3;

/// How a finished game was won, for host highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinKind {
    /// Five in a row in one direction.
    Line,
    /// Five in a row plus a crossing run of three (cross rule only).
    Cross,
}

/// Five-in-row rule set.
///
/// The optional cross rule recognizes a "cross" win (a five with a
/// crossing run of at least three) as its own win kind; it does not
/// change which positions are terminal, only how the win is reported.
#[derive(Clone, Copy, Debug)]
pub struct FiveInRowRules {
    size: u16,
    cross_rule: bool,
}

impl Default for FiveInRowRules {
    fn default() -> Self {
        Self::new()
    }
}

impl FiveInRowRules {
    /// Create the standard 15x15 rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cross_rule: false,
        }
    }

    /// Use a custom board size.
    #[must_use]
    pub fn with_size(mut self, size: u16) -> Self {
        assert!(size as usize >= WIN_RUN, "Board must fit a winning run");
        self.size = size;
        self
    }

    /// Enable cross-win reporting.
    #[must_use]
    pub fn with_cross_rule(mut self) -> Self {
        self.cross_rule = true;
        self
    }

    /// The consecutive run of `player` stones through `coord` in the
    /// given direction, including `coord` itself.
    fn run_through(board: &Board, coord: Coord, player: PlayerId, dir: (i16, i16)) -> Vec<Coord> {
        let mut cells = vec![coord];

        for sign in [-1i16, 1] {
            let mut cursor = coord.offset(dir.0 * sign, dir.1 * sign);
            while board.get_or_empty(cursor).owner() == Some(player) && board.contains(cursor) {
                if sign < 0 {
                    cells.insert(0, cursor);
                } else {
                    cells.push(cursor);
                }
                cursor = cursor.offset(dir.0 * sign, dir.1 * sign);
            }
        }

        cells
    }

    /// The winning run through the last-placed stone, if the position is
    /// won. Hosts use the cell list for highlighting.
    #[must_use]
    pub fn winning_cells(&self, state: &GameState) -> Option<(WinKind, Vec<Coord>)> {
        let last = state.last_move()?;
        let (player, dest) = (last.player, last.mov.dest);

        if self.cross_rule {
            let horizontal = Self::run_through(&state.board, dest, player, (0, 1));
            let vertical = Self::run_through(&state.board, dest, player, (1, 0));

            if (horizontal.len() >= WIN_RUN && vertical.len() >= CROSS_RUN)
                || (vertical.len() >= WIN_RUN && horizontal.len() >= CROSS_RUN)
            {
                let mut cells = horizontal;
                cells.extend(vertical.into_iter().filter(|c| *c != dest));
                return Some((WinKind::Cross, cells));
            }
        }

        for dir in LINES {
            let run = Self::run_through(&state.board, dest, player, dir);
            if run.len() >= WIN_RUN {
                return Some((WinKind::Line, run));
            }
        }

        None
    }
}

impl RuleSet for FiveInRowRules {
    fn variant(&self) -> Variant {
        Variant::FiveInRow
    }

    fn initial_state(&self) -> GameState {
        GameState::new(Board::new(self.size, self.size), PlayerId::First)
    }

    fn moves_from(&self, state: &GameState, coord: Coord) -> Vec<Move> {
        if state.board.contains(coord) && state.board.get_or_empty(coord).is_empty() {
            vec![Move::placement(coord)]
        } else {
            vec![]
        }
    }

    fn apply_move(&self, state: &mut GameState, mov: &Move) -> Result<(), RulesError> {
        if !self.moves_from(state, mov.dest).contains(mov) {
            return Err(RulesError::IllegalMove {
                origin: mov.origin,
                dest: mov.dest,
            });
        }

        state.record_move(mov.clone());
        let player = state.to_move();
        state
            .board
            .set(mov.dest, Cell::Occupied(player, PieceKind::Stone))?;
        state.set_to_move(player.opponent());

        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(last) = state.last_move() {
            if self.winning_cells(state).is_some() {
                return Some(GameResult::Winner(last.player));
            }
        }

        if state.board.is_full() {
            return Some(GameResult::Draw);
        }

        None
    }
}
