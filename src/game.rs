use log::{debug, info};

use crate::{
    board::Board,
    common::{GameStatus, GuessResult},
    coord::{parse_coordinate, Coordinate},
};

/// Resolves guesses against a hidden board and tracks the session state.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    board: Board,
    status: GameStatus,
    shots: usize,
    hits: usize,
}

impl GuessEngine {
    /// Start a session on `board`. A board without ships starts out won.
    pub fn new(board: Board) -> Self {
        let status = if board.all_ships_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            board,
            status,
            shots: 0,
            hits: 0,
        }
    }

    /// Immutable reference to the board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give the board back, e.g. to reveal it after the session.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the session reached `Won` or `Exited`.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Number of accepted guesses (hits plus misses).
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.shots - self.hits
    }

    /// Ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.board.ship_cell_count() - self.board.hit_ship_cells()
    }

    /// Resolve a guess at `coord`.
    ///
    /// Off-board coordinates are `Invalid` and repeated cells `AlreadyGuessed`;
    /// neither touches the board. Otherwise the cell is marked hit whether or
    /// not a ship is there.
    pub fn resolve_guess(&mut self, coord: Coordinate) -> GuessResult {
        if self.is_over() {
            return GuessResult::GameOver;
        }
        if !self.board.contains(coord) {
            debug!("guess {:?} is off the board", coord);
            return GuessResult::Invalid;
        }
        let is_ship = match self.board.get(coord) {
            Some(cell) if cell.hit() => return GuessResult::AlreadyGuessed,
            Some(cell) => cell.is_ship(),
            None => return GuessResult::Invalid,
        };
        self.board.mark_hit(coord);
        self.shots += 1;
        let result = if is_ship {
            self.hits += 1;
            GuessResult::Hit
        } else {
            GuessResult::Miss
        };
        debug!("guess {} -> {:?}", coord, result);

        if self.board.all_ships_sunk() {
            info!("all ships sunk after {} shots", self.shots);
            self.status = GameStatus::Won;
        }
        result
    }

    /// Parse coordinate text like `b3` and resolve it. Unreadable text is
    /// `Invalid`.
    pub fn resolve_text(&mut self, text: &str) -> GuessResult {
        if self.is_over() {
            return GuessResult::GameOver;
        }
        match parse_coordinate(text, self.board.rows()) {
            Ok(coord) => self.resolve_guess(coord),
            Err(e) => {
                debug!("unreadable guess {:?}: {}", text, e);
                GuessResult::Invalid
            }
        }
    }

    /// Leave the session without winning.
    pub fn exit(&mut self) {
        if self.status == GameStatus::InProgress {
            info!("player exited after {} shots", self.shots);
            self.status = GameStatus::Exited;
        }
    }
}
