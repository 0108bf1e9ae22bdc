//! Coordinates and the text form players type, e.g. `B3`.
//!
//! Rows are labelled with letters starting at `A`, columns with numbers
//! starting at `1`. Internally both are zero-based.

use alloc::string::{String, ToString};
use core::fmt;

/// Number of distinct row letters.
pub const MAX_LABELLED_ROWS: usize = 26;

/// Zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_label(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col.saturating_add(1)),
            None => write!(f, "({}, {})", self.row, self.col.saturating_add(1)),
        }
    }
}

/// Letter shown for row `index`, if it has one.
pub fn row_label(index: usize) -> Option<char> {
    if index < MAX_LABELLED_ROWS {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

/// Row index for `letter` on a board with `rows` rows. Case-insensitive.
pub fn row_index(letter: char, rows: usize) -> Option<usize> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    if index < rows.min(MAX_LABELLED_ROWS) {
        Some(index)
    } else {
        None
    }
}

/// Why coordinate text could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Nothing was entered.
    Empty,
    /// The leading character is not a row letter on this board.
    BadRow(char),
    /// The column part is missing, not a number, or zero.
    BadColumn(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "No coordinate entered"),
            CoordError::BadRow(ch) => write!(f, "'{}' is not a row on this board", ch),
            CoordError::BadColumn(s) if s.is_empty() => write!(f, "Missing column number"),
            CoordError::BadColumn(s) => write!(f, "'{}' is not a column number", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

/// Parse `<RowLetter><Column>` text for a board with `rows` rows.
///
/// The column is only checked for being a positive number; whether it lies on
/// the board is left to the guess engine.
pub fn parse_coordinate(text: &str, rows: usize) -> Result<Coordinate, CoordError> {
    let text = text.trim();
    let mut chars = text.chars();
    let row_ch = chars.next().ok_or(CoordError::Empty)?;
    let row = row_index(row_ch, rows).ok_or(CoordError::BadRow(row_ch))?;
    let col_str = chars.as_str().trim();
    let col: usize = col_str
        .parse()
        .map_err(|_| CoordError::BadColumn(col_str.to_string()))?;
    if col == 0 {
        return Err(CoordError::BadColumn(col_str.to_string()));
    }
    Ok(Coordinate::new(row, col - 1))
}
