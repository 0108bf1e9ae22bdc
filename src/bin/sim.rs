//! Plays a game automatically and prints a JSON summary.
//!
//! Usage: `sim <seed> [size]`. Every coordinate is guessed once in a shuffled
//! order drawn from the same seeded RNG that generated the board.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::prelude::*;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;

#[cfg(feature = "std")]
#[derive(Serialize)]
struct Summary {
    size: usize,
    seed: u64,
    shots: usize,
    hits: usize,
    misses: usize,
    status: GameStatus,
    board: Board,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    battleship::init_logging(false);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed> [size]", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => 5,
    };
    let preset = BoardPreset::from_size(size)
        .ok_or_else(|| anyhow::anyhow!("unsupported board size {}", size))?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let board = GameConfig::from_preset(preset, false)
        .generate(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut order: Vec<_> = board.coordinates().collect();
    order.shuffle(&mut rng);

    let mut engine = GuessEngine::new(board);
    for coord in order {
        if engine.resolve_guess(coord) == GuessResult::GameOver {
            break;
        }
    }

    let summary = Summary {
        size,
        seed,
        shots: engine.shots(),
        hits: engine.hits(),
        misses: engine.misses(),
        status: engine.status(),
        board: engine.into_board(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
