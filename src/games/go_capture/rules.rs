//! Go capture rules: placement, group liberties, atomic captures.
//!
//! Groups are maximal 4-connected sets of like-colored stones; a group
//! with no adjacent empty cell (liberty) is captured whole. Suicide
//! placements are illegal: placing into a cell that leaves the placer's
//! own group with zero liberties, unless the placement captures first.
//!
//! Terminal detection is absent. Go puzzles are goal-based
//! (kill this group, save that one) and the goal check belongs to the
//! puzzle definition in the host; the rule set exposes group and liberty
//! queries so hosts can express those goals.

use rustc_hash::FxHashSet;

use crate::core::{Board, Cell, Coord, GameState, Move, PieceKind, PlayerId, RulesError, ORTHOGONAL};
use crate::rules::{GameResult, RuleSet, Variant};

const DEFAULT_SIZE: u16 = 11;

/// Go capture rule set.
///
/// Puzzles start from a prepared position; seed it with `with_stone`.
///
/// ## Example
///
/// ```
/// use rust_boardgame::core::{Coord, PlayerId};
/// use rust_boardgame::games::go_capture::GoCaptureRules;
/// use rust_boardgame::rules::RuleSet;
///
/// let rules = GoCaptureRules::new()
///     .with_stone(Coord::new(5, 5), PlayerId::Second)
///     .with_stone(Coord::new(4, 5), PlayerId::First)
///     .with_stone(Coord::new(6, 5), PlayerId::First)
///     .with_stone(Coord::new(5, 4), PlayerId::First);
///
/// let state = rules.initial_state();
/// // The white stone has one liberty left at (5, 6).
/// assert_eq!(rules.liberty_count(&state, Coord::new(5, 5)), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GoCaptureRules {
    size: u16,
    setup: Vec<(Coord, PlayerId)>,
    start: PlayerId,
}

impl Default for GoCaptureRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GoCaptureRules {
    /// Create the standard 11x11 rule set with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            setup: Vec::new(),
            start: PlayerId::First,
        }
    }

    /// Use a custom board size.
    #[must_use]
    pub fn with_size(mut self, size: u16) -> Self {
        assert!(size > 1, "Board must hold at least one group and liberty");
        self.size = size;
        self
    }

    /// Add a stone to the starting position.
    #[must_use]
    pub fn with_stone(mut self, coord: Coord, player: PlayerId) -> Self {
        assert!(
            coord.row >= 0
                && coord.col >= 0
                && (coord.row as u16) < self.size
                && (coord.col as u16) < self.size,
            "Setup stone {coord} is outside the board"
        );
        self.setup.push((coord, player));
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.start = player;
        self
    }

    /// The maximal 4-connected group of like-colored stones at `coord`.
    /// Empty for an empty or off-board cell.
    #[must_use]
    pub fn group_at(&self, state: &GameState, coord: Coord) -> Vec<Coord> {
        group(&state.board, coord)
    }

    /// Number of liberties of the group at `coord`.
    #[must_use]
    pub fn liberty_count(&self, state: &GameState, coord: Coord) -> usize {
        liberties(&state.board, &group(&state.board, coord))
    }

    /// Resolve a placement: the enemy stones it captures, or `None` when
    /// the placement is suicide and therefore illegal.
    fn placement_outcome(&self, board: &Board, coord: Coord, player: PlayerId) -> Option<Vec<Coord>> {
        let mut sim = board.clone();
        sim.set(coord, Cell::Occupied(player, PieceKind::Stone)).ok()?;

        // Collect enemy groups that just lost their last liberty. Two
        // neighbors can share a group, so track visited stones.
        let mut captured: Vec<Coord> = Vec::new();
        let mut seen: FxHashSet<Coord> = FxHashSet::default();

        for (d_row, d_col) in ORTHOGONAL {
            let neighbor = coord.offset(d_row, d_col);
            if sim.get_or_empty(neighbor).owner() != Some(player.opponent())
                || seen.contains(&neighbor)
            {
                continue;
            }

            let enemy_group = group(&sim, neighbor);
            let dead = liberties(&sim, &enemy_group) == 0;
            for &stone in &enemy_group {
                seen.insert(stone);
                if dead {
                    captured.push(stone);
                }
            }
        }

        for &stone in &captured {
            // In-range: captured stones came off this board.
            let _ = sim.set(stone, Cell::Empty);
        }

        if captured.is_empty() {
            let own_group = group(&sim, coord);
            if liberties(&sim, &own_group) == 0 {
                return None; // suicide
            }
        }

        captured.sort();
        Some(captured)
    }
}

/// Flood-fill the like-colored group containing `start`.
fn group(board: &Board, start: Coord) -> Vec<Coord> {
    let Some(owner) = board.get_or_empty(start).owner() else {
        return vec![];
    };

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut stack = vec![start];
    let mut members = Vec::new();

    while let Some(coord) = stack.pop() {
        if !visited.insert(coord) {
            continue;
        }
        if board.get_or_empty(coord).owner() != Some(owner) {
            continue;
        }

        members.push(coord);
        for (d_row, d_col) in ORTHOGONAL {
            stack.push(coord.offset(d_row, d_col));
        }
    }

    members
}

/// Count the distinct empty cells adjacent to a group.
fn liberties(board: &Board, members: &[Coord]) -> usize {
    let mut libs: FxHashSet<Coord> = FxHashSet::default();

    for &coord in members {
        for (d_row, d_col) in ORTHOGONAL {
            let neighbor = coord.offset(d_row, d_col);
            if board.contains(neighbor) && board.get_or_empty(neighbor).is_empty() {
                libs.insert(neighbor);
            }
        }
    }

    libs.len()
}

impl RuleSet for GoCaptureRules {
    fn variant(&self) -> Variant {
        Variant::GoCapture
    }

    fn initial_state(&self) -> GameState {
        let mut board = Board::new(self.size, self.size);

        for &(coord, player) in &self.setup {
            // In-range: checked by with_stone.
            let _ = board.set(coord, Cell::Occupied(player, PieceKind::Stone));
        }

        GameState::new(board, self.start)
    }

    fn moves_from(&self, state: &GameState, coord: Coord) -> Vec<Move> {
        if !state.board.contains(coord) || !state.board.get_or_empty(coord).is_empty() {
            return vec![];
        }

        match self.placement_outcome(&state.board, coord, state.to_move()) {
            Some(captures) => vec![Move::placement(coord).with_captures(captures)],
            None => vec![],
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

        for &captured in &mov.captures {
            state.board.set(captured, Cell::Empty)?;
        }

        state.set_to_move(player.opponent());
        Ok(())
    }

    /// Always `None`: puzzle goals are evaluated by the host.
    fn is_terminal(&self, _state: &GameState) -> Option<GameResult> {
        None
    }
}
