//! Interactive terminal session.
//!
//! Reads guesses line by line, resolves them through a [`GuessEngine`] and
//! prints the board after every turn. Generic over the input and output
//! streams so a whole game can be driven from a script.

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    common::GameStatus,
    config::BoardPreset,
    coord::{parse_coordinate, row_label},
    game::GuessEngine,
    render::{describe, render_board},
};

/// Words that end the session early.
pub const EXIT_TOKENS: [&str; 3] = ["exit", "quit", "q"];

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Guess(String),
}

/// Interpret a line of input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if EXIT_TOKENS.iter().any(|t| line.eq_ignore_ascii_case(t)) {
        Some(Command::Exit)
    } else {
        Some(Command::Guess(line.to_string()))
    }
}

/// Print `prompt` and read one line. Returns `None` at end of input. Bytes
/// that are not UTF-8 are replaced so the line still reaches the parser.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Ask for a board size until a supported one is entered. Returns `None` if
/// the player exits or input ends.
pub fn choose_preset<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<BoardPreset>> {
    loop {
        let Some(line) = read_line(input, out, "Choose a board size (4, 5 or 6): ")? else {
            return Ok(None);
        };
        match parse_command(&line) {
            Some(Command::Exit) => return Ok(None),
            Some(Command::Guess(text)) => {
                let preset = text.parse::<usize>().ok().and_then(BoardPreset::from_size);
                match preset {
                    Some(p) => return Ok(Some(p)),
                    None => writeln!(out, "'{}' is not a supported size.", text)?,
                }
            }
            None => {}
        }
    }
}

/// Play until every ship is sunk or the player leaves. End of input counts
/// as leaving. `reveal` shows ship positions on every board printed.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut GuessEngine,
    input: &mut R,
    out: &mut W,
    reveal: bool,
) -> io::Result<GameStatus> {
    let rows = engine.board().rows();
    let last_row = row_label(rows - 1).unwrap_or('Z');
    let prompt = format!(
        "Guess a cell (A1-{}{}) or 'exit': ",
        last_row,
        engine.board().columns()
    );
    while !engine.is_over() {
        writeln!(out)?;
        write!(out, "{}", render_board(engine.board(), reveal))?;
        let Some(line) = read_line(input, out, &prompt)? else {
            engine.exit();
            break;
        };
        match parse_command(&line) {
            None => {}
            Some(Command::Exit) => engine.exit(),
            Some(Command::Guess(text)) => {
                let coord = parse_coordinate(&text, rows).ok();
                let result = engine.resolve_text(&text);
                writeln!(out, "{}", describe(result, &text, coord))?;
            }
        }
    }

    match engine.status() {
        GameStatus::Won => {
            writeln!(out)?;
            write!(out, "{}", render_board(engine.board(), true))?;
            writeln!(out, "*** VICTORY! ***")?;
            writeln!(
                out,
                "You sank every ship in {} shots ({} hits, {} misses).",
                engine.shots(),
                engine.hits(),
                engine.misses()
            )?;
        }
        GameStatus::Exited => {
            writeln!(
                out,
                "Leaving the game with {} ship cell(s) still afloat.",
                engine.remaining_ship_cells()
            )?;
        }
        GameStatus::InProgress => {}
    }
    Ok(engine.status())
}
