//! Player stack data models.

use crate::chips::ChipInventory;
use serde::{Deserialize, Serialize};

/// Opaque player identifier
pub type PlayerId = String;

/// A player's chip stack with its derived readings.
///
/// `total_value` and `big_blind_depth` are derived and only ever written by
/// [`crate::players::StackRegistry`]; they are recomputed on every inventory
/// write and every big-blind change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStack {
    /// Display label for this stack
    pub display_name: String,
    /// Held chips by denomination value
    pub inventory: ChipInventory,
    /// Derived: total monetary value of the inventory
    pub total_value: i64,
    /// Derived: stack depth in big blinds
    pub big_blind_depth: f64,
}

impl PlayerStack {
    /// A zeroed stack over a prepared inventory
    pub fn new(display_name: &str, inventory: ChipInventory) -> Self {
        Self {
            display_name: display_name.to_string(),
            inventory,
            total_value: 0,
            big_blind_depth: 0.0,
        }
    }

    /// Classification of this stack's depth
    pub fn status(&self) -> StackStatus {
        StackStatus::from_depth(self.big_blind_depth)
    }
}

/// Stack depth classification.
///
/// Thresholds are part of the contract: below 20 big blinds is short, below
/// 40 is medium, everything else is healthy. Exactly 20 is medium and exactly
/// 40 is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackStatus {
    Short,
    Medium,
    Healthy,
}

impl StackStatus {
    /// Classify a big-blind depth
    pub fn from_depth(big_blinds: f64) -> Self {
        if big_blinds < 20.0 {
            StackStatus::Short
        } else if big_blinds < 40.0 {
            StackStatus::Medium
        } else {
            StackStatus::Healthy
        }
    }
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackStatus::Short => write!(f, "Short Stack"),
            StackStatus::Medium => write!(f, "Medium Stack"),
            StackStatus::Healthy => write!(f, "Healthy Stack"),
        }
    }
}
