//! Player chip stacks and the stack registry.
//!
//! The registry owns every player's chip inventory and keeps the derived
//! total value and big-blind depth in step: every inventory write recomputes
//! that player, and every big-blind change recomputes all of them.

pub mod models;
pub mod registry;

pub use models::{PlayerId, PlayerStack, StackStatus};
pub use registry::StackRegistry;
