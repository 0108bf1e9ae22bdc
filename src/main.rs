#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship::{cli, init_logging, BoardPreset, GameConfig, GameStatus, GuessEngine};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Find the hidden fleet on a small square board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board size; asks interactively when omitted.
    #[arg(long, value_enum)]
    size: Option<BoardPreset>,
    /// Reveal every ship while playing.
    #[arg(long)]
    debug: bool,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Log at debug level unless BATTLESHIP_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let preset = match args.size {
        Some(p) => p,
        None => match cli::choose_preset(&mut input, &mut out)? {
            Some(p) => p,
            None => return Ok(()),
        },
    };
    let config = GameConfig::from_preset(preset, args.debug);

    let mut rng = if let Some(s) = args.seed {
        writeln!(out, "Using fixed seed: {} (board will be reproducible)", s)?;
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let board = config
        .generate(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))
        .context("could not set up the board")?;
    log::info!(
        "starting {}x{} game with {} ship cells",
        config.rows,
        config.columns,
        board.ship_cell_count()
    );

    let mut engine = GuessEngine::new(board);
    let status = cli::run_session(&mut engine, &mut input, &mut out, config.debug)?;
    if status == GameStatus::Exited {
        log::info!("session exited");
    }
    Ok(())
}
