//! Session actor owning the live tournament state.
//!
//! The actor holds the configuration store, the tournament clock and the
//! stack registry on a single logical thread of control: every mutation
//! arrives through the message inbox and the one-second tick is applied by
//! the same task, so transitions never race and no stale tick can fire
//! against a superseded state. Clock notifications fan out over a broadcast
//! channel; consumers render them however they like.

pub mod actor;
pub mod messages;

pub use actor::{SessionActor, SessionHandle};
pub use messages::{PlayerEntry, SessionMessage, SessionSnapshot};
