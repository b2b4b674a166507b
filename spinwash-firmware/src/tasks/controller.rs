//! Foreground controller task
//!
//! Polls the buttons, steps the cycle controller, publishes the screen and
//! runs the alarm pattern while the alarm is active. The alarm hold is an
//! async delay: it pauses button polling but never the tick tasks.

use defmt::*;
use embassy_time::{Delay, Timer};

use spinwash_core::alarm::AlarmPattern;
use spinwash_core::config::MachineConfig;
use spinwash_core::input::ButtonScanner;
use spinwash_core::state::{Event, Fault};
use spinwash_core::{Controller, CycleContext};
use spinwash_drivers::{Annunciator, ButtonBank};
use spinwash_hal_rp2040::{RpInput, RpOutput};

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE, STATE_CHANNEL};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(
    ctx: &'static CycleContext,
    config: &'static MachineConfig,
    buttons: ButtonBank<RpInput>,
    mut annunciator: Annunciator<RpOutput, RpOutput>,
    startup_fault: Option<Fault>,
) {
    info!("Controller task started");

    let mut controller = Controller::new(ctx, config);
    let mut scanner = ButtonScanner::new(config.input.debounce_polls);
    let pattern = config.alarm.pattern();
    let mut delay = Delay;
    let mut alarm_sounding = false;

    if let Some(fault) = startup_fault {
        error!("Starting halted: {:?}", fault);
        if let Some(event) = controller.fault(fault) {
            report(event, &controller);
        }
    }

    loop {
        let pressed = scanner.scan(buttons.sample());
        if let Some(button) = pressed {
            debug!("Button: {:?}", button);
        }

        if let Some(event) = controller.step(pressed) {
            report(event, &controller);
        }

        publish(&mut controller).await;

        if controller.alarm_active() {
            alarm_sounding = true;
            pattern.run_once(&mut annunciator, &mut delay).await;
        } else {
            if alarm_sounding {
                AlarmPattern::silence(&mut annunciator);
                alarm_sounding = false;
            }
            Timer::after_millis(u64::from(config.input.poll_interval_ms)).await;
        }
    }
}

/// Render a fault screen when the board could not be brought up
///
/// Used when there are no pins to run the controller task with.
pub async fn publish_fault(ctx: &'static CycleContext, config: &MachineConfig, fault: Fault) {
    let mut controller = Controller::new(ctx, config);
    if let Some(event) = controller.fault(fault) {
        report(event, &controller);
    }
    publish(&mut controller).await;
}

fn report(event: Event, controller: &Controller<'_>) {
    if STATE_CHANNEL.try_send((event, controller.state())).is_err() {
        warn!("State log full, dropped {:?}", event);
    }
}

/// Copy the controller's screen to the shared buffer if it changed
async fn publish(controller: &mut Controller<'_>) {
    if let Some(screen) = controller.take_screen() {
        *SCREEN_BUFFER.lock().await = screen.clone();
        SCREEN_UPDATE.signal(());
    }
}
