//! Configuration loading
//!
//! The machine configuration is the embedded `washer.toml`, parsed with the
//! core `no_std` parser.

pub mod loader;

pub use loader::load_embedded;
