//! Optional JSON configuration. The file exists for exactly two things a
//! deployment may need to pin: the Sysmex rack dimensions (sites disagree on
//! whether the rack is 10x15 or 20x10, so the choice is explicit here rather
//! than hard-coded) and the default fill convention used when a caller does
//! not name one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fill_order::{Corner, Direction};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sysmex: SysmexConfig,
    pub fill: FillConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sysmex: SysmexConfig::default(),
            fill: FillConfig::default(),
        }
    }
}

/// Dimensions of the Sysmex archive rack (zone 17).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SysmexConfig {
    pub rows: u32,
    pub columns: u32,
}

impl Default for SysmexConfig {
    fn default() -> Self {
        // The display code has always computed with 15 columns; the zone
        // inventory annotates the same rack as 20x10. The shipped default
        // follows the display code.
        Self {
            rows: 10,
            columns: 15,
        }
    }
}

/// Fill convention applied when the caller supplies dimensions but no
/// corner/direction pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub corner: Corner,
    pub direction: Direction,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            corner: Corner::BottomLeft,
            direction: Direction::Up,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    Ok(config)
}
