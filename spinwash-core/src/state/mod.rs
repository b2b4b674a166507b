//! Wash cycle state machine
//!
//! The cycle is explicit, finite and deterministic: every output the
//! controller drives is a function of the current state and the event that
//! produced it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Fault, State};
