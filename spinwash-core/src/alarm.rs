//! Completion alarm
//!
//! While the alarm is active the foreground repeats one pattern period:
//! indicator on and buzzer toggled, hold, indicator and buzzer off, hold.
//! The hold is an async delay, so the tick tasks keep running through it.

use embedded_hal_async::delay::DelayNs;

/// Buzzer and indicator lines driven by the alarm
pub trait AlarmOutput {
    /// Invert the buzzer line
    fn toggle_buzzer(&mut self);

    /// Drive the buzzer line inactive
    fn buzzer_off(&mut self);

    /// Light or extinguish the indicator LED
    fn set_indicator(&mut self, on: bool);
}

/// Alarm timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmPattern {
    hold_us: u32,
}

impl Default for AlarmPattern {
    fn default() -> Self {
        Self::new(4_500)
    }
}

impl AlarmPattern {
    pub const fn new(hold_us: u32) -> Self {
        Self { hold_us }
    }

    /// Hold time between the two halves of a period
    pub fn hold_us(&self) -> u32 {
        self.hold_us
    }

    /// Length of one full period
    pub fn period_us(&self) -> u64 {
        u64::from(self.hold_us) * 2
    }

    /// Run one period of the pattern
    ///
    /// Dropping the future mid-period may leave the lines on; call
    /// [`AlarmPattern::silence`] afterwards.
    pub async fn run_once<A, D>(&self, output: &mut A, delay: &mut D)
    where
        A: AlarmOutput,
        D: DelayNs,
    {
        output.set_indicator(true);
        output.toggle_buzzer();
        delay.delay_us(self.hold_us).await;

        output.set_indicator(false);
        output.buzzer_off();
        delay.delay_us(self.hold_us).await;
    }

    /// Force both lines off
    pub fn silence<A: AlarmOutput>(output: &mut A) {
        output.buzzer_off();
        output.set_indicator(false);
    }
}
