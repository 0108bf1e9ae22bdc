#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coord;
mod game;
mod generator;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use ship::*;
