#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes records to stderr so they stay out of the game's stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:<5} {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `BATTLESHIP_LOG`, falling back to `default` when unset or invalid.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the logger. `verbose` raises the fallback level from `warn` to
/// `debug`; the environment variable still wins when set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let level = level_from_env(fallback);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
