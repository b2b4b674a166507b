//! Dynamic pin allocation for config-driven hardware setup
//!
//! Provides a way to get GPIO pins by number at runtime, so pin assignment
//! comes from the TOML config rather than being hardcoded.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};
use spinwash_core::config::{PinConfig, MAX_GPIO};

use crate::gpio::{RpInput, RpOutput};

const PIN_COUNT: usize = MAX_GPIO as usize + 1;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT],
}

impl PinBank {
    /// Create a pin bank from peripherals
    ///
    /// Takes ownership of every GPIO pin. After this call, pins must be
    /// obtained through [`PinBank::take`].
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(usize::from(pin_num))
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        matches!(self.pins.get(usize::from(pin_num)), Some(Some(_)))
    }

    /// Take a configured output, starting inactive
    pub fn output(&mut self, config: &PinConfig) -> Result<RpOutput, PinError> {
        let pin = self.take(config.pin)?;
        Ok(RpOutput::new(pin, config.inverted))
    }

    /// Take a configured input
    pub fn input(&mut self, config: &PinConfig) -> Result<RpInput, PinError> {
        let pin = self.take(config.pin)?;
        Ok(RpInput::new(pin, config.pull_up))
    }
}
