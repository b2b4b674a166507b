//! Elapsed-seconds tick
//!
//! Runs independently of the PWM tick on its own ticker.

use defmt::*;
use embassy_time::{Duration, Ticker};

use spinwash_core::timing::TICK_PERIOD_US;
use spinwash_core::CycleContext;

/// Seconds counter task
#[embassy_executor::task]
pub async fn seconds_task(ctx: &'static CycleContext) {
    info!("Seconds task started");

    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        ticker.next().await;

        if ctx.seconds_tick() {
            trace!("Elapsed: {}s", ctx.elapsed_seconds());
        }
    }
}
