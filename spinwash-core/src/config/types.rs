//! Configuration type definitions
//!
//! Everything here has a `Default` matching the stock appliance, so a
//! missing section in the config file is never an error.

use crate::alarm::AlarmPattern;
use crate::mode::ModeTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create an active-low input with pull-up, the usual button wiring
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Pin assignment for every line the controller drives or reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinsConfig {
    pub motor: PinConfig,
    pub buzzer: PinConfig,
    /// Indicator LED
    pub indicator: PinConfig,
    /// Buttons in wiring order: High, Medium, Low, Start
    pub buttons: [PinConfig; 4],
}

impl Default for PinsConfig {
    fn default() -> Self {
        Self {
            motor: PinConfig::new(2),
            buzzer: PinConfig::new(3),
            indicator: PinConfig::inverted(4),
            buttons: [
                PinConfig::button(10),
                PinConfig::button(11),
                PinConfig::button(12),
                PinConfig::button(13),
            ],
        }
    }
}

impl PinsConfig {
    /// All configured pins, outputs first
    pub fn iter(&self) -> impl Iterator<Item = &PinConfig> {
        [&self.motor, &self.buzzer, &self.indicator]
            .into_iter()
            .chain(self.buttons.iter())
    }

    /// Check every pin is in range and no pin is used twice
    pub fn is_valid(&self) -> bool {
        let mut seen: u32 = 0;
        for pin in self.iter() {
            if pin.pin > MAX_GPIO {
                return false;
            }
            let mask = 1u32 << pin.pin;
            if seen & mask != 0 {
                return false;
            }
            seen |= mask;
        }
        true
    }
}

/// Button sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Consecutive identical polls before a line changes state
    pub debounce_polls: u8,
    /// Foreground poll period in milliseconds
    pub poll_interval_ms: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_polls: 3,
            poll_interval_ms: 5,
        }
    }
}

/// Completion alarm settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmConfig {
    /// Hold time between toggles in microseconds
    pub hold_us: u32,
    /// Let a Start press silence the alarm and return to the start prompt
    ///
    /// Off by default: the alarm runs until power is removed.
    pub acknowledge_with_start: bool,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            hold_us: 4_500,
            acknowledge_with_start: false,
        }
    }
}

impl AlarmConfig {
    /// Pattern timing for the alarm driver
    pub fn pattern(&self) -> AlarmPattern {
        AlarmPattern::new(self.hold_us)
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    pub modes: ModeTable,
    pub input: InputConfig,
    pub alarm: AlarmConfig,
    pub pins: PinsConfig,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values the controller relies on
    pub fn is_valid(&self) -> bool {
        self.modes.is_valid()
            && self.input.debounce_polls > 0
            && self.input.poll_interval_ms > 0
            && self.alarm.hold_us > 0
            && self.pins.is_valid()
    }
}
