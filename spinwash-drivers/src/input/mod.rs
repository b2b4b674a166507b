//! Button inputs

pub mod buttons;

pub use buttons::ButtonBank;
