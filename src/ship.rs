//! Ship kinds, manifests and placements.

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship. Each kind has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    Large,
    Small,
}

impl ShipKind {
    pub const ALL: [ShipKind; 2] = [ShipKind::Large, ShipKind::Small];

    /// Number of cells the ship occupies.
    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Large => 3,
            ShipKind::Small => 2,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Large => "Large",
            ShipKind::Small => "Small",
        }
    }
}

/// One manifest entry: place `count` ships of `kind`, all tagged with `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub kind: ShipKind,
    pub id: u32,
    pub count: usize,
}

impl ShipSpec {
    pub const fn new(kind: ShipKind, id: u32, count: usize) -> Self {
        Self { kind, id, count }
    }

    /// Cells covered by every ship of this entry.
    pub const fn cells(&self) -> usize {
        self.count.saturating_mul(self.kind.length())
    }
}

/// Total number of ship cells a manifest places.
pub fn manifest_cells(manifest: &[ShipSpec]) -> usize {
    manifest
        .iter()
        .fold(0, |total, spec| total.saturating_add(spec.cells()))
}

/// A single ship run anchored at (`row`, `col`), extending right or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: ShipKind,
    pub id: u32,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(kind: ShipKind, id: u32, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            id,
            row,
            col,
            orientation,
        }
    }

    /// Anchor of the run.
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }

    /// Coordinates covered by the run, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Placement {
            row,
            col,
            orientation,
            ..
        } = *self;
        (0..self.kind.length()).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(row, col.saturating_add(i)),
            Orientation::Vertical => Coordinate::new(row.saturating_add(i), col),
        })
    }

    /// True when the whole run lies inside a `rows` x `columns` board.
    pub fn fits(&self, rows: usize, columns: usize) -> bool {
        let len = self.kind.length();
        match self.orientation {
            Orientation::Horizontal => {
                self.row < rows && self.col < columns && len <= columns - self.col
            }
            Orientation::Vertical => self.col < columns && self.row < rows && len <= rows - self.row,
        }
    }
}
