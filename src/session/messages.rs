//! Session actor message types.

use crate::chips::ChipInventory;
use crate::clock::{BlindField, ClockState};
use crate::config::models::{BlindLevel, TournamentConfig};
use crate::config::ConfigResult;
use crate::players::{PlayerId, PlayerStack};
use serde::Serialize;
use tokio::sync::oneshot;

/// Messages that can be sent to a SessionActor
#[derive(Debug)]
pub enum SessionMessage {
    /// Start the countdown
    Start,

    /// Pause the countdown
    Pause,

    /// Reset the current level to its full duration
    ResetLevel,

    /// Skip to the next blind level
    AdvanceLevel,

    /// Toggle manual blind entry mode
    SetManualMode(bool),

    /// Toggle auto-advance at level expiry
    SetAutoAdvance(bool),

    /// Toggle audible warning rendering
    SetSoundEnabled(bool),

    /// Edit a blind value of the current level (manual mode only)
    UpdateManualBlind { field: BlindField, value: i64 },

    /// Replace a player's inventory wholesale
    SetInventory {
        player_id: PlayerId,
        inventory: ChipInventory,
    },

    /// Add or remove chips of one denomination
    AdjustChips {
        player_id: PlayerId,
        denomination: i64,
        delta: i64,
    },

    /// Set the held count of one denomination
    SetChipCount {
        player_id: PlayerId,
        denomination: i64,
        count: i64,
    },

    /// Reset one player to a zero inventory
    ClearStack { player_id: PlayerId },

    /// Activate a saved configuration by name
    SwitchConfig {
        name: String,
        response: oneshot::Sender<ConfigResult<()>>,
    },

    /// Upsert a configuration into the saved catalog
    SaveConfig { config: TournamentConfig },

    /// Replace the active configuration in place (live settings edit)
    ReplaceActiveConfig { config: TournamentConfig },

    /// Import a configuration snapshot: parse, save and activate
    ImportConfig {
        snapshot: String,
        response: oneshot::Sender<ConfigResult<()>>,
    },

    /// Export the active configuration as snapshot text
    ExportConfig {
        response: oneshot::Sender<ConfigResult<String>>,
    },

    /// Get an immutable snapshot of the whole session
    GetSnapshot {
        response: oneshot::Sender<SessionSnapshot>,
    },

    /// Close the session
    Shutdown,
}

/// One player entry of a session snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub stack: PlayerStack,
}

/// Immutable snapshot of the session for the presentation layer.
///
/// Rendering reads this; it never mutates session state directly.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Name of the active configuration
    pub config_name: String,
    /// Names in the saved catalog, in save order
    pub saved_config_names: Vec<String>,
    /// Clock state
    pub clock: ClockState,
    /// The blind level the clock currently sits on
    pub current_level: BlindLevel,
    /// Player stacks in stable id order
    pub players: Vec<PlayerEntry>,
}
