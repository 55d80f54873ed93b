//! Chip denominations and stack valuation.
//!
//! This module holds the chip data models and the pure functions that turn a
//! chip inventory into a monetary total and a big-blind-relative stack depth.
//! Everything here is side-effect free so the same inputs always produce the
//! same outputs.

pub mod models;
pub mod valuation;

pub use models::{ChipDenomination, ChipInventory};
pub use valuation::{big_blind_depth, format_clock, initial_inventory, sorted_by_value, total};
