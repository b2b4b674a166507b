//! Software PWM on a GPIO line
//!
//! Call [`PwmMotor::on_tick`] once per millisecond. Each call writes the
//! level for the current frame slot and advances the frame, so a duty of
//! `d` keeps the line active for `d` of every 10 ticks.
//!
//! This is the only writer of the motor line.

use spinwash_core::timing::PwmFrame;
use spinwash_core::CycleContext;
use spinwash_hal::{Level, OutputPin};

use crate::line::OutputLine;

/// Motor control line driven by a software PWM frame
pub struct PwmMotor<P> {
    line: OutputLine<P>,
    frame: PwmFrame,
}

impl<P: OutputPin> PwmMotor<P> {
    /// Create a motor driver with the line off
    ///
    /// # Arguments
    /// - `pin`: The motor control pin
    /// - `active_low`: If true, the motor runs while the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self {
            line: OutputLine::new(pin, active_low),
            frame: PwmFrame::new(),
        }
    }

    /// Drive one tick from the shared context's duty
    pub fn on_tick(&mut self, ctx: &CycleContext) -> Level {
        let level = ctx.pwm_tick(&mut self.frame);
        self.line.set_level(level);
        level
    }

    /// Drive one tick at an explicit duty
    pub fn tick_with_duty(&mut self, duty: u8) -> Level {
        let level = self.frame.tick(duty);
        self.line.set_level(level);
        level
    }

    /// Force the line off without advancing the frame
    pub fn stop(&mut self) {
        self.line.set_active(false);
    }

    /// Check if the motor line is currently active
    pub fn is_energized(&self) -> bool {
        self.line.is_active()
    }

    /// Current frame slot
    pub fn slot(&self) -> u8 {
        self.frame.slot()
    }
}
