//! GPIO wrappers implementing the `spinwash-hal` pin traits

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Push-pull output
pub struct RpOutput(Output<'static>);

impl RpOutput {
    /// Configure a pin as output, starting at the given level
    ///
    /// Active-low loads should start high so they do not pulse on at boot.
    pub fn new(pin: Peri<'static, AnyPin>, initial_high: bool) -> Self {
        let level = if initial_high { Level::High } else { Level::Low };
        Self(Output::new(pin, level))
    }
}

impl spinwash_hal::OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct RpInput(Input<'static>);

impl RpInput {
    /// Configure a pin as input, optionally with the internal pull-up
    pub fn new(pin: Peri<'static, AnyPin>, pull_up: bool) -> Self {
        let pull = if pull_up { Pull::Up } else { Pull::None };
        Self(Input::new(pin, pull))
    }
}

impl spinwash_hal::InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
