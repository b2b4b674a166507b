//! Operator input
//!
//! Four momentary buttons, sampled by the foreground loop and turned into
//! at most one press event per poll.

pub mod scanner;

pub use scanner::{Button, ButtonScanner, BUTTON_COUNT};
