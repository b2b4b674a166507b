//! Motor PWM tick
//!
//! Regenerates the motor waveform: one frame slot per millisecond, ten
//! slots per frame. The duty is re-read from the context on every tick, so
//! a change from the controller lands on the next tick.

use defmt::*;
use embassy_time::{Duration, Ticker};

use spinwash_core::timing::TICK_PERIOD_US;
use spinwash_core::CycleContext;
use spinwash_drivers::PwmMotor;
use spinwash_hal_rp2040::RpOutput;

/// Motor PWM task - sole writer of the motor line
#[embassy_executor::task]
pub async fn pwm_task(ctx: &'static CycleContext, mut motor: PwmMotor<RpOutput>) {
    info!("PWM task started");

    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        motor.on_tick(ctx);
        ticker.next().await;
    }
}
