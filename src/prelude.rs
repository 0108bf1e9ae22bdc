//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate, parse_coordinate, Board, BoardPreset, Coordinate, GameConfig, GameStatus,
    GuessEngine, GuessResult, ShipKind, ShipSpec,
};

#[cfg(feature = "std")]
pub use crate::{cli::run_session, init_logging, render::render_board};
