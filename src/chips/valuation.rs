//! Pure valuation functions over chip inventories.

use super::models::{ChipDenomination, ChipInventory};

/// Total monetary value of an inventory.
///
/// Sums `denomination * count` over every entry. Entries whose denomination
/// is no longer part of the configured set still count by their numeric key,
/// so a stale inventory keeps a meaningful total after a denomination edit.
/// The result is independent of entry order.
pub fn total(inventory: &ChipInventory) -> i64 {
    inventory
        .iter()
        .map(|(value, count)| value * i64::from(*count))
        .sum()
}

/// Stack depth expressed in big blinds.
///
/// Returns `total / big_blind` when the big blind is positive, otherwise
/// `0.0`. Never divides by zero and never panics.
pub fn big_blind_depth(total: i64, big_blind: i64) -> f64 {
    if big_blind > 0 {
        total as f64 / big_blind as f64
    } else {
        0.0
    }
}

/// Zeroed inventory over a configured denomination set.
pub fn initial_inventory(denominations: &[ChipDenomination]) -> ChipInventory {
    denominations.iter().map(|d| (d.value, 0)).collect()
}

/// Denominations in ascending display order.
///
/// Display order only; `total` does not depend on it.
pub fn sorted_by_value(denominations: &[ChipDenomination]) -> Vec<ChipDenomination> {
    let mut sorted = denominations.to_vec();
    sorted.sort_by_key(|d| d.value);
    sorted
}

/// Format a second count as a zero-padded `MM:SS` clock string.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
