//! Buzzer plus indicator LED
//!
//! Implements the core [`AlarmOutput`] trait over two GPIO lines. The
//! buzzer is a self-oscillating type driven by toggling its line once per
//! alarm period.

use spinwash_core::alarm::AlarmOutput;
use spinwash_hal::OutputPin;

use crate::line::OutputLine;

/// Buzzer and indicator LED
pub struct Annunciator<B, L> {
    buzzer: OutputLine<B>,
    indicator: OutputLine<L>,
}

impl<B: OutputPin, L: OutputPin> Annunciator<B, L> {
    /// Create an annunciator with both lines off
    pub fn new(
        buzzer: B,
        buzzer_active_low: bool,
        indicator: L,
        indicator_active_low: bool,
    ) -> Self {
        Self {
            buzzer: OutputLine::new(buzzer, buzzer_active_low),
            indicator: OutputLine::new(indicator, indicator_active_low),
        }
    }

    /// Check if the buzzer line is active
    pub fn buzzer_active(&self) -> bool {
        self.buzzer.is_active()
    }

    /// Check if the indicator is lit
    pub fn indicator_lit(&self) -> bool {
        self.indicator.is_active()
    }
}

impl<B: OutputPin, L: OutputPin> AlarmOutput for Annunciator<B, L> {
    fn toggle_buzzer(&mut self) {
        self.buzzer.toggle();
    }

    fn buzzer_off(&mut self) {
        self.buzzer.set_active(false);
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set_active(on);
    }
}
