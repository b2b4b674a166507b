//! State transition log

use defmt::*;

use crate::channels::STATE_CHANNEL;

/// Drain state transitions and log them
#[embassy_executor::task]
pub async fn event_log_task() {
    loop {
        let (event, state) = STATE_CHANNEL.receive().await;
        info!("{} -> {}", event, state);
    }
}
