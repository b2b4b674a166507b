//! RP2040-specific HAL for the washer firmware
//!
//! This crate provides RP2040 implementations of the shared `spinwash-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO output/input wrappers over `embassy-rp`
//! - Dynamic pin allocation for config-driven setup

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};
