//! Output line with polarity
//!
//! Drivers talk in terms of "active" and "inactive"; the line maps that to
//! a pin level according to how the load is wired.

use spinwash_hal::{Level, OutputPin};

/// An output pin plus its active level
pub struct OutputLine<P> {
    pin: P,
    /// If true, active = pin LOW
    active_low: bool,
}

impl<P: OutputPin> OutputLine<P> {
    /// Wrap a pin and drive it inactive
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut line = Self { pin, active_low };
        line.set_active(false);
        line
    }

    /// Drive the line active or inactive
    pub fn set_active(&mut self, active: bool) {
        self.pin.set_level(self.level_for(active));
    }

    /// Drive a logical level (`High` = active)
    pub fn set_level(&mut self, level: Level) {
        self.set_active(level.into());
    }

    /// Invert the line
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Check if the line is currently active
    pub fn is_active(&self) -> bool {
        self.pin.is_set_high() != self.active_low
    }

    /// Get the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    fn level_for(&self, active: bool) -> Level {
        Level::from(active != self.active_low)
    }
}
