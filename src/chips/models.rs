//! Chip data models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player's chip inventory, keyed by denomination value.
///
/// Denominations missing from the map are held at count zero.
pub type ChipInventory = BTreeMap<i64, u32>;

/// A configured chip denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipDenomination {
    /// Chip value in tournament units
    #[serde(rename = "denomination")]
    pub value: i64,
    /// Chip face color (CSS color string)
    pub color: String,
    /// Label color drawn over the chip face
    pub text_color: String,
}

impl ChipDenomination {
    /// Create a new chip denomination
    pub fn new(value: i64, color: &str, text_color: &str) -> Self {
        Self {
            value,
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }
}
