//! Tournament configuration: blind schedules, chip sets, and the saved
//! configuration catalog.
//!
//! This module provides:
//! - Configuration data models with the built-in presets
//! - The configuration store (active configuration + saved catalog)
//! - Snapshot import/export in the portable JSON format

pub mod errors;
pub mod models;
pub mod snapshot;
pub mod store;

pub use errors::{ConfigError, ConfigResult};
pub use models::{BlindLevel, TournamentConfig};
pub use snapshot::{parse_snapshot, render_snapshot, snapshot_file_name};
pub use store::ConfigStore;
