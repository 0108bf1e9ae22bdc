//! Game board: a grid of cells carrying ship occupancy and hit state.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::ship::{Placement, ShipKind};

/// Ship occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipMark {
    pub kind: ShipKind,
    pub id: u32,
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    ship: Option<ShipMark>,
    hit: bool,
}

impl Cell {
    /// Ship kind in this cell, `None` for open water.
    pub fn kind(&self) -> Option<ShipKind> {
        self.ship.map(|s| s.kind)
    }

    pub fn ship_id(&self) -> Option<u32> {
        self.ship.map(|s| s.id)
    }

    pub fn ship(&self) -> Option<ShipMark> {
        self.ship
    }

    pub fn is_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.ship.is_none()
    }

    /// Whether this coordinate has been guessed.
    pub fn hit(&self) -> bool {
        self.hit
    }
}

/// A `rows` x `columns` grid plus the runs placed on it.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    placements: Vec<Placement>,
}

impl Board {
    /// Create an all-empty board.
    pub fn empty(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![vec![Cell::default(); columns]; rows],
            placements: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.columns
    }

    /// Cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(coord.row).and_then(|row| row.get(coord.col))
    }

    pub(crate) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
    }

    /// Rows of cells, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |r| (0..columns).map(move |c| Coordinate::new(r, c)))
    }

    /// Runs placed so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// True if the whole run is on the board and every cell is empty.
    pub fn can_place(&self, placement: &Placement) -> bool {
        placement.fits(self.rows, self.columns)
            && placement
                .cells()
                .all(|c| self.get(c).map_or(false, Cell::is_empty))
    }

    /// Place a ship run. Ships may touch but never share a cell.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        if !placement.fits(self.rows, self.columns) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.can_place(&placement) {
            return Err(BoardError::ShipOverlaps);
        }
        let mark = ShipMark {
            kind: placement.kind,
            id: placement.id,
        };
        for coord in placement.cells() {
            if let Some(cell) = self.get_mut(coord) {
                *cell = Cell {
                    ship: Some(mark),
                    hit: false,
                };
            }
        }
        self.placements.push(placement);
        Ok(())
    }

    /// Mark `coord` as guessed. Returns the previous hit flag, or `None` when
    /// off the board.
    pub(crate) fn mark_hit(&mut self, coord: Coordinate) -> Option<bool> {
        self.get_mut(coord)
            .map(|cell| core::mem::replace(&mut cell.hit, true))
    }

    fn cells_iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of cells occupied by ships.
    pub fn ship_cell_count(&self) -> usize {
        self.cells_iter().filter(|c| c.is_ship()).count()
    }

    /// Number of ship cells already hit.
    pub fn hit_ship_cells(&self) -> usize {
        self.cells_iter().filter(|c| c.is_ship() && c.hit).count()
    }

    /// Returns `true` when every ship cell has been hit.
    pub fn all_ships_sunk(&self) -> bool {
        self.cells_iter().filter(|c| c.is_ship()).all(|c| c.hit)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.columns)?;
        for row in &self.cells {
            f.write_str("  ")?;
            for cell in row {
                let ch = match (cell.kind(), cell.hit) {
                    (Some(ShipKind::Large), false) => 'L',
                    (Some(ShipKind::Small), false) => 'S',
                    (Some(_), true) => 'X',
                    (None, true) => 'o',
                    (None, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  placements: {:?}\n}}", self.placements)
    }
}
