//! Display refresh task
//!
//! Waits for the controller to publish a new screen and copies it to the
//! display sink.

use defmt::*;

use spinwash_core::display::CharDisplay;

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};

/// Display task - pushes the shared screen buffer to the panel
#[embassy_executor::task]
pub async fn display_task(mut display: crate::display::RttDisplay) {
    info!("Display task started");

    loop {
        SCREEN_UPDATE.wait().await;

        let screen = SCREEN_BUFFER.lock().await;
        if let Err(e) = screen.render_to(&mut display) {
            warn!("Display update failed: {:?}", e);
        } else {
            trace!("Screen update sent");
        }
    }
}
