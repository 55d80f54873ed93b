//! Tournament configuration data models.

use crate::chips::ChipDenomination;
use serde::{Deserialize, Serialize};

/// One level of the blind schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindLevel {
    /// Level number (1-indexed)
    pub level: u32,
    /// Small blind amount
    pub small_blind: i64,
    /// Big blind amount
    pub big_blind: i64,
    /// Ante amount (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ante: Option<i64>,
    /// Duration of this level in minutes
    #[serde(rename = "duration")]
    pub duration_mins: u32,
}

impl BlindLevel {
    /// Create a new blind level
    pub fn new(level: u32, small_blind: i64, big_blind: i64, duration_mins: u32) -> Self {
        Self {
            level,
            small_blind,
            big_blind,
            ante: None,
            duration_mins,
        }
    }

    /// Create a blind level with ante
    pub fn with_ante(mut self, ante: i64) -> Self {
        self.ante = Some(ante);
        self
    }

    /// Level duration in seconds
    pub fn duration_secs(&self) -> u32 {
        self.duration_mins * 60
    }
}

/// Tournament configuration: a named chip set plus a blind schedule.
///
/// The `name` is the identity key in the saved catalog. Configurations are
/// value types: any edit produces a new value rather than mutating one a
/// running clock or registry was handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    /// Configuration name (identity key)
    pub name: String,
    /// Chip denomination set
    pub chips: Vec<ChipDenomination>,
    /// Ordered blind level schedule
    pub blind_structure: Vec<BlindLevel>,
}

impl TournamentConfig {
    /// The standard tournament preset: seven denominations, ten 20-minute
    /// levels from 25/50 to 800/1600.
    pub fn standard() -> Self {
        Self {
            name: "Standard Tournament".to_string(),
            chips: vec![
                ChipDenomination::new(25, "#22c55e", "#ffffff"),
                ChipDenomination::new(100, "#000000", "#ffffff"),
                ChipDenomination::new(500, "#dc2626", "#ffffff"),
                ChipDenomination::new(1000, "#3b82f6", "#ffffff"),
                ChipDenomination::new(5000, "#8b5cf6", "#ffffff"),
                ChipDenomination::new(10000, "#f59e0b", "#000000"),
                ChipDenomination::new(25000, "#ec4899", "#ffffff"),
            ],
            blind_structure: vec![
                BlindLevel::new(1, 25, 50, 20),
                BlindLevel::new(2, 50, 100, 20),
                BlindLevel::new(3, 75, 150, 20),
                BlindLevel::new(4, 100, 200, 20),
                BlindLevel::new(5, 150, 300, 20),
                BlindLevel::new(6, 200, 400, 20),
                BlindLevel::new(7, 300, 600, 20),
                BlindLevel::new(8, 400, 800, 20),
                BlindLevel::new(9, 600, 1200, 20),
                BlindLevel::new(10, 800, 1600, 20),
            ],
        }
    }

    /// The turbo tournament preset: five denominations, six 10-minute levels.
    pub fn turbo() -> Self {
        Self {
            name: "Turbo Tournament".to_string(),
            chips: vec![
                ChipDenomination::new(25, "#22c55e", "#ffffff"),
                ChipDenomination::new(100, "#000000", "#ffffff"),
                ChipDenomination::new(500, "#dc2626", "#ffffff"),
                ChipDenomination::new(1000, "#3b82f6", "#ffffff"),
                ChipDenomination::new(5000, "#8b5cf6", "#ffffff"),
            ],
            blind_structure: vec![
                BlindLevel::new(1, 25, 50, 10),
                BlindLevel::new(2, 50, 100, 10),
                BlindLevel::new(3, 75, 150, 10),
                BlindLevel::new(4, 100, 200, 10),
                BlindLevel::new(5, 150, 300, 10),
                BlindLevel::new(6, 200, 400, 10),
            ],
        }
    }

    /// Get blind level by level number.
    ///
    /// Lookup is by the level's own number, not by position, so schedules
    /// with gaps behave predictably.
    pub fn get_blind_level(&self, level: u32) -> Option<&BlindLevel> {
        self.blind_structure.iter().find(|bl| bl.level == level)
    }

    /// First level of the schedule
    pub fn first_level(&self) -> Option<&BlindLevel> {
        self.blind_structure.first()
    }
}
