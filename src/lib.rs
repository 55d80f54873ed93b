//! # Chip Clock
//!
//! A poker tournament clock and chip stack tracking library for a single
//! device: a countdown timer advancing through a configurable blind-level
//! schedule, and per-player chip inventories converted into big-blind
//! stack-depth readings.
//!
//! ## Architecture
//!
//! The core is synchronous and side-effect free:
//!
//! - **chips**: pure valuation of chip inventories
//! - **config**: tournament configurations, the saved catalog and JSON
//!   snapshot import/export
//! - **clock**: the tournament clock state machine (start/pause/reset/skip,
//!   one-second ticks, warning thresholds, auto-advance, manual mode)
//! - **players**: the stack registry keeping derived totals and big-blind
//!   depths in step with inventories and the current big blind
//!
//! The **session** module wraps the core in an actor: one task owns all
//! state, applies every transition including the scheduled tick, and fans
//! warning notifications out over a broadcast channel. Presentation layers
//! read immutable snapshots and send messages; they never mutate state
//! directly.
//!
//! ## Example
//!
//! ```
//! use chip_clock::clock::TournamentClock;
//! use chip_clock::config::TournamentConfig;
//!
//! let mut clock = TournamentClock::new(&TournamentConfig::standard());
//! clock.start();
//! let events = clock.tick();
//! assert!(events.is_empty());
//! assert_eq!(clock.state().remaining_secs, 1199);
//! ```

/// Chip denominations and pure stack valuation.
pub mod chips;
pub use chips::{ChipDenomination, ChipInventory};

/// Tournament configurations, saved catalog, snapshot import/export.
pub mod config;
pub use config::{BlindLevel, ConfigError, ConfigResult, ConfigStore, TournamentConfig};

/// The tournament clock state machine.
pub mod clock;
pub use clock::{BlindField, ClockEvent, ClockState, TournamentClock};

/// Player chip stacks and the stack registry.
pub mod players;
pub use players::{PlayerStack, StackRegistry, StackStatus};

/// Async session actor owning the live tournament state.
pub mod session;
pub use session::{SessionActor, SessionHandle, SessionMessage, SessionSnapshot};
