//! spinwash Hardware Abstraction Layer
//!
//! This crate defines the digital I/O traits that the drivers are written
//! against. Chip-specific crates (currently only RP2040) implement them for
//! their GPIO types, and tests implement them with in-memory mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  spinwash-drivers / spinwash-firmware   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  spinwash-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ spinwash-hal-     │
//!           │    rp2040         │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, Level, OutputPin};
