//! Board-agnostic core logic for the washing-machine controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Wash modes and the mode → (duty, duration) table
//! - Configuration types and the TOML subset parser
//! - The shared context crossing the tick/foreground boundary
//! - PWM frame generation and the elapsed-seconds counter
//! - Debounced button scanning
//! - The cycle state machine and the foreground controller
//! - Screen model and the alarm pattern

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod context;
pub mod controller;
pub mod display;
pub mod input;
pub mod mode;
pub mod state;
pub mod timing;

pub use context::CycleContext;
pub use controller::Controller;
pub use mode::{Mode, ModeProfile, ModeTable};
pub use state::{Event, Fault, State};
