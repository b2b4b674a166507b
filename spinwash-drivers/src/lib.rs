//! Hardware driver implementations
//!
//! Drivers for the washer's lines, written against the `spinwash-hal` pin
//! traits so they run unchanged on the target and against mock pins:
//!
//! - Motor line driven from the shared PWM duty
//! - Buzzer and indicator LED annunciator for the completion alarm
//! - Four-button input bank with per-line polarity

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod input;
pub mod line;
pub mod motor;

pub use alarm::Annunciator;
pub use input::ButtonBank;
pub use line::OutputLine;
pub use motor::PwmMotor;
