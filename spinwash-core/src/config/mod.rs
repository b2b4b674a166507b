//! Machine configuration
//!
//! Configuration types plus a small `no_std` parser for the TOML subset the
//! firmware embeds.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
