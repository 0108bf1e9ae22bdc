use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::generator::generate;
use crate::ship::{ShipKind, ShipSpec};

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

/// Id shared by every large ship in the presets.
pub const LARGE_SHIP_ID: u32 = 1;
/// Id shared by every small ship in the presets.
pub const SMALL_SHIP_ID: u32 = 2;

const FOUR_SHIPS: [ShipSpec; 2] = [
    ShipSpec::new(ShipKind::Large, LARGE_SHIP_ID, 1),
    ShipSpec::new(ShipKind::Small, SMALL_SHIP_ID, 2),
];
const FIVE_SHIPS: [ShipSpec; 2] = [
    ShipSpec::new(ShipKind::Large, LARGE_SHIP_ID, 1),
    ShipSpec::new(ShipKind::Small, SMALL_SHIP_ID, 2),
];
const SIX_SHIPS: [ShipSpec; 2] = [
    ShipSpec::new(ShipKind::Large, LARGE_SHIP_ID, 1),
    ShipSpec::new(ShipKind::Small, SMALL_SHIP_ID, 3),
];

/// Supported square board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardPreset {
    #[cfg_attr(feature = "std", value(name = "4"))]
    Four,
    #[cfg_attr(feature = "std", value(name = "5"))]
    Five,
    #[cfg_attr(feature = "std", value(name = "6"))]
    Six,
}

impl BoardPreset {
    pub const ALL: [BoardPreset; 3] = [BoardPreset::Four, BoardPreset::Five, BoardPreset::Six];

    /// Preset for an `n` x `n` board.
    pub fn from_size(n: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.size() == n)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        match self {
            BoardPreset::Four => 4,
            BoardPreset::Five => 5,
            BoardPreset::Six => 6,
        }
    }

    pub fn manifest(&self) -> &'static [ShipSpec] {
        match self {
            BoardPreset::Four => &FOUR_SHIPS,
            BoardPreset::Five => &FIVE_SHIPS,
            BoardPreset::Six => &SIX_SHIPS,
        }
    }
}

/// Everything needed to set up one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub manifest: Vec<ShipSpec>,
    /// Reveal ship positions while playing.
    pub debug: bool,
}

impl GameConfig {
    pub fn from_preset(preset: BoardPreset, debug: bool) -> Self {
        Self {
            rows: preset.size(),
            columns: preset.size(),
            manifest: preset.manifest().to_vec(),
            debug,
        }
    }

    /// Generate a fresh board for this configuration.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Board, BoardError> {
        generate(rng, self.rows, self.columns, &self.manifest)
    }
}
