//! Common types for Battleship: board errors, guess results and game status.

use crate::ship::ShipKind;

/// Result of resolving a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess struck a ship segment.
    Hit,
    /// Guess landed on open water.
    Miss,
    /// The cell was already guessed; nothing changed.
    AlreadyGuessed,
    /// Coordinate was malformed or off the board; nothing changed.
    Invalid,
    /// The session already ended; no further guesses are accepted.
    GameOver,
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship cell has been hit.
    Won,
    /// The player left before winning.
    Exited,
}

/// Errors returned by board construction and ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    InvalidDimensions { rows: usize, columns: usize },
    /// The manifest needs more cells than the board has.
    ManifestTooLarge { required: usize, available: usize },
    /// The ship does not fit the board in either orientation.
    ShipTooLong { kind: ShipKind },
    /// Placement runs off the edge of the board.
    ShipOutOfBounds,
    /// Placement overlaps with another ship.
    ShipOverlaps,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, columns } => {
                write!(f, "Board dimensions {}x{} must both be positive", rows, columns)
            }
            BoardError::ManifestTooLarge {
                required,
                available,
            } => write!(
                f,
                "Ships need {} cells but the board only has {}",
                required, available
            ),
            BoardError::ShipTooLong { kind } => write!(
                f,
                "{} ship of length {} does not fit on the board",
                kind.name(),
                kind.length()
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
