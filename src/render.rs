#![cfg(feature = "std")]

//! Text rendering of a board for the terminal.

use std::fmt::{self, Write};

use crate::{
    board::{Board, Cell},
    common::GuessResult,
    coord::{row_label, Coordinate},
    ship::ShipKind,
};

const LARGE_GLYPH: &str = "🔵";
const SMALL_GLYPH: &str = "🟠";
const WATER_GLYPH: &str = "❗";
const HIDDEN_GLYPH: &str = "-";

/// Display helper for one cell. Unguessed cells stay hidden unless revealed.
struct CellGlyph<'a> {
    cell: &'a Cell,
    reveal: bool,
}

impl fmt::Display for CellGlyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !(self.reveal || self.cell.hit()) {
            return f.pad(HIDDEN_GLYPH);
        }
        f.pad(match self.cell.kind() {
            Some(ShipKind::Large) => LARGE_GLYPH,
            Some(ShipKind::Small) => SMALL_GLYPH,
            None => WATER_GLYPH,
        })
    }
}

/// Render the board as a table: column numbers across the top, row letters
/// down the side.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..board.columns() {
        let _ = write!(out, " {:>2}", c + 1);
    }
    out.push('\n');
    for (r, row) in board.rows_iter().enumerate() {
        match row_label(r) {
            Some(letter) => {
                let _ = write!(out, "{:>2} ", letter);
            }
            None => {
                let _ = write!(out, "{:>2} ", r);
            }
        }
        for cell in row {
            let _ = write!(out, " {:>2}", CellGlyph { cell, reveal });
        }
        out.push('\n');
    }
    out
}

/// Player-facing message for a guess result.
pub fn describe(result: GuessResult, input: &str, coord: Option<Coordinate>) -> String {
    let at = coord.map_or_else(|| input.trim().to_string(), |c| c.to_string());
    match result {
        GuessResult::Hit => format!("Hit! {} struck a ship.", at),
        GuessResult::Miss => format!("Miss. {} is open water.", at),
        GuessResult::AlreadyGuessed => format!("You already guessed {}.", at),
        GuessResult::Invalid => format!("'{}' is not a valid coordinate.", input.trim()),
        GuessResult::GameOver => "The game is already over.".to_string(),
    }
}
