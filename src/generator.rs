//! Random board generation by rejection sampling.
//!
//! Placement retries have no cap. Manifests that can never be placed (zero
//! dimensions, more ship cells than board cells, a ship longer than both
//! sides) are rejected up front; a manifest that passes those checks but packs
//! the board tightly may take arbitrarily many attempts, and one whose ships
//! cannot be arranged at all never returns.

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::ship::{manifest_cells, Orientation, Placement, ShipKind, ShipSpec};

/// Build a board of `rows` x `columns` with every ship in `manifest` placed at
/// random. Ships are placed in manifest order, drawing from `rng` sequentially.
pub fn generate<R: Rng>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    manifest: &[ShipSpec],
) -> Result<Board, BoardError> {
    let mut board = Board::empty(rows, columns)?;
    check_manifest(&board, manifest)?;
    for spec in manifest {
        for _ in 0..spec.count {
            let placement = random_placement(&board, rng, spec.kind, spec.id);
            board.place(placement)?;
        }
    }
    debug!(
        "generated {}x{} board with {} ships",
        rows,
        columns,
        board.placements().len()
    );
    Ok(board)
}

/// Reject manifests for which placement can provably never finish.
pub fn check_manifest(board: &Board, manifest: &[ShipSpec]) -> Result<(), BoardError> {
    let required = manifest_cells(manifest);
    if required > board.area() {
        return Err(BoardError::ManifestTooLarge {
            required,
            available: board.area(),
        });
    }
    let longest_side = board.rows().max(board.columns());
    if let Some(spec) = manifest
        .iter()
        .find(|s| s.count > 0 && s.kind.length() > longest_side)
    {
        return Err(BoardError::ShipTooLong { kind: spec.kind });
    }
    Ok(())
}

/// Draw placements for a `kind` ship until one lands entirely on empty cells.
///
/// Orientation is chosen uniformly, then the anchor uniformly among the
/// positions that keep the run on the board. An orientation the ship cannot
/// fit in at all counts as a rejected attempt.
pub fn random_placement<R: Rng>(
    board: &Board,
    rng: &mut R,
    kind: ShipKind,
    id: u32,
) -> Placement {
    let len = kind.length();
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (board.rows(), (board.columns() + 1).saturating_sub(len)),
            Orientation::Vertical => ((board.rows() + 1).saturating_sub(len), board.columns()),
        };
        if max_r == 0 || max_c == 0 {
            trace!("{} ship cannot lie {:?}", kind.name(), orientation);
            continue;
        }
        let row = rng.random_range(0..max_r);
        let col = rng.random_range(0..max_c);
        let placement = Placement::new(kind, id, row, col, orientation);
        if board.can_place(&placement) {
            debug!(
                "placed {} ship {} at {} {:?} after {} attempt(s)",
                kind.name(),
                id,
                placement.origin(),
                orientation,
                attempts
            );
            return placement;
        }
        trace!(
            "rejected {} ship at {} {:?}",
            kind.name(),
            placement.origin(),
            orientation
        );
    }
}
