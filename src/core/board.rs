//! The board: a typed 2D store of cells.
//!
//! `Board` holds no game logic. Bounds violations are reported as
//! `RulesError::OutOfBounds`, never clamped or wrapped; rule sets decide
//! what a coordinate means.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::RulesError;
use super::player::PlayerId;

/// What kind of piece occupies a cell.
///
/// Placement games use `Stone` only; checkers uses `Man` and `King`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Stone,
    Man,
    King,
}

/// Contents of a single board cell. Immutable value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(PlayerId, PieceKind),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the owner of the piece in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Occupied(player, _) => Some(player),
            Cell::Empty => None,
        }
    }

    /// Get the piece kind in this cell, if any.
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Occupied(_, kind) => Some(kind),
            Cell::Empty => None,
        }
    }
}

/// A rectangular grid of cells with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    height: u16,
    width: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimensions.
    #[must_use]
    pub fn new(height: u16, width: u16) -> Self {
        assert!(height > 0 && width > 0, "Board dimensions must be nonzero");

        Self {
            height,
            width,
            cells: vec![Cell::Empty; height as usize * width as usize],
        }
    }

    /// Board height (number of rows).
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Board width (number of columns).
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as u16) < self.height
            && (coord.col as u16) < self.width
    }

    /// The center cell (rounded down for even dimensions).
    #[must_use]
    pub fn center(&self) -> Coord {
        Coord::new((self.height / 2) as i16, (self.width / 2) as i16)
    }

    fn index(&self, coord: Coord) -> Result<usize, RulesError> {
        if self.contains(coord) {
            Ok(coord.row as usize * self.width as usize + coord.col as usize)
        } else {
            Err(RulesError::OutOfBounds { coord })
        }
    }

    /// Get the cell at a coordinate.
    ///
    /// Fails with `OutOfBounds` if the coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Result<Cell, RulesError> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Set the cell at a coordinate.
    ///
    /// Fails with `OutOfBounds` if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), RulesError> {
        let idx = self.index(coord)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Get the cell at a coordinate, or `Empty` for off-board coordinates.
    ///
    /// Convenience for neighbor scans where stepping off the board just
    /// means "nothing there"; explicit bounds errors stay with `get`.
    #[must_use]
    pub fn get_or_empty(&self, coord: Coord) -> Cell {
        if self.contains(coord) {
            self.cells[coord.row as usize * self.width as usize + coord.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let coord = Coord::new((i / width) as i16, (i % width) as i16);
            (coord, cell)
        })
    }

    /// Count pieces belonging to a player.
    #[must_use]
    pub fn piece_count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}
