//! Tick-driven timing
//!
//! Both timers run from a 1 ms periodic tick. The PWM frame is owned by the
//! PWM tick context; the elapsed counter lives in the shared context.

pub mod elapsed;
pub mod pwm;

pub use elapsed::{ElapsedCounter, TICKS_PER_SECOND};
pub use pwm::{PwmFrame, SLOTS_PER_FRAME};

/// Period of both timer ticks in microseconds
pub const TICK_PERIOD_US: u64 = 1_000;
