//! Four-button input bank
//!
//! Reads the raw lines and applies wiring polarity. Debouncing is the
//! core scanner's job; this only answers "is the contact closed right now".

use spinwash_core::input::BUTTON_COUNT;
use spinwash_hal::InputPin;

/// The operator buttons in wiring order: High, Medium, Low, Start
pub struct ButtonBank<I> {
    pins: [I; BUTTON_COUNT],
    /// If true, pressed = pin LOW (pull-up wiring)
    active_low: [bool; BUTTON_COUNT],
}

impl<I: InputPin> ButtonBank<I> {
    pub fn new(pins: [I; BUTTON_COUNT], active_low: [bool; BUTTON_COUNT]) -> Self {
        Self { pins, active_low }
    }

    /// Bank with every button wired to ground through a pull-up
    pub fn pulled_up(pins: [I; BUTTON_COUNT]) -> Self {
        Self::new(pins, [true; BUTTON_COUNT])
    }

    /// Raw pressed state of each line, polarity applied
    pub fn sample(&self) -> [bool; BUTTON_COUNT] {
        core::array::from_fn(|i| self.pins[i].is_high() != self.active_low[i])
    }
}
