//! Clock data models.

use serde::{Deserialize, Serialize};

/// Immutable clock state snapshot.
///
/// When `manual_mode` is set, ticking is suspended and `remaining_secs` is
/// not meaningful to consumers; `is_running` still carries the run/pause
/// state the clock resumes into when manual mode is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockState {
    /// Whether the countdown is running
    pub is_running: bool,
    /// Seconds remaining in the current level
    pub remaining_secs: u32,
    /// Current blind level number
    pub current_level: u32,
    /// Advance to the next level automatically when the countdown hits zero
    pub auto_advance: bool,
    /// Whether warning notifications should be rendered audibly
    pub sound_enabled: bool,
    /// Manual blind entry mode (suspends ticking)
    pub manual_mode: bool,
}

/// Events emitted by a clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// The countdown crossed a warning threshold (60, 30 or 10 seconds).
    /// Edge-triggered: fires exactly once, on the decrement that lands on
    /// the threshold.
    TimeWarning { remaining_secs: u32 },
    /// The countdown hit zero and the clock auto-advanced to `level`
    LevelAdvanced { level: u32 },
    /// The countdown hit zero with no auto-continue; the clock stopped
    Expired,
}

/// Blind level field editable in manual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlindField {
    SmallBlind,
    BigBlind,
    Ante,
}

impl std::fmt::Display for BlindField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlindField::SmallBlind => write!(f, "small_blind"),
            BlindField::BigBlind => write!(f, "big_blind"),
            BlindField::Ante => write!(f, "ante"),
        }
    }
}
