//! Motor driver
//!
//! The washer motor has a single on/off control line; speed comes from the
//! 10-slot PWM frame generated in the 1 ms tick.

pub mod pwm_line;

pub use pwm_line::PwmMotor;
