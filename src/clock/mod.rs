//! Tournament clock state machine.
//!
//! The clock counts a blind level down one second at a time, emits warning
//! events at fixed thresholds, and advances through the blind schedule either
//! automatically at zero or on demand. The state machine here is fully
//! synchronous; the one-second drive and its cancellation discipline live in
//! [`crate::session`].

pub mod models;
pub mod state_machine;

pub use models::{BlindField, ClockEvent, ClockState};
pub use state_machine::TournamentClock;
