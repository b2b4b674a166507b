//! Spinwash - Washing-Machine Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. One foreground controller
//! task plus two independent 1 ms tick tasks (motor PWM and elapsed
//! seconds), sharing a single static cycle context.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use spinwash_core::config::{MachineConfig, PinsConfig};
use spinwash_core::state::Fault;
use spinwash_core::CycleContext;
use spinwash_drivers::{Annunciator, ButtonBank, PwmMotor};
use spinwash_hal_rp2040::{PinBank, PinError, RpInput, RpOutput};

use crate::display::RttDisplay;

mod channels;
mod config;
mod display;
mod tasks;

/// State shared between the tick tasks and the controller
static CONTEXT: CycleContext = CycleContext::new();

// Configuration must live forever for task references
static MACHINE_CONFIG: StaticCell<MachineConfig> = StaticCell::new();

/// Everything the tasks drive or read
struct Board {
    motor: PwmMotor<RpOutput>,
    annunciator: Annunciator<RpOutput, RpOutput>,
    buttons: ButtonBank<RpInput>,
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Spinwash firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // A rejected config halts the machine; the default pins still give
    // the alarm and the fault screen something to drive.
    let (config, startup_fault) = match config::load_embedded() {
        Ok(config) => (config, None),
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            (MachineConfig::default(), Some(Fault::InvalidConfig))
        }
    };
    let config: &'static MachineConfig = MACHINE_CONFIG.init(config);

    let mut bank = PinBank::new(p);

    spawner.spawn(tasks::display_task(RttDisplay::new())).unwrap();
    spawner.spawn(tasks::event_log_task()).unwrap();

    let board = match claim_board(&mut bank, &config.pins) {
        Ok(board) => board,
        Err(e) => {
            error!("Pin setup failed: {:?}", e);
            tasks::publish_fault(&CONTEXT, config, Fault::PeripheralInit).await;
            park().await
        }
    };
    info!("Pins claimed");

    spawner.spawn(tasks::pwm_task(&CONTEXT, board.motor)).unwrap();
    spawner.spawn(tasks::seconds_task(&CONTEXT)).unwrap();
    spawner
        .spawn(tasks::controller_task(
            &CONTEXT,
            config,
            board.buttons,
            board.annunciator,
            startup_fault,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    park().await
}

/// Take every configured pin from the bank
fn claim_board(bank: &mut PinBank, pins: &PinsConfig) -> Result<Board, PinError> {
    let motor = PwmMotor::new(bank.output(&pins.motor)?, pins.motor.inverted);
    let annunciator = Annunciator::new(
        bank.output(&pins.buzzer)?,
        pins.buzzer.inverted,
        bank.output(&pins.indicator)?,
        pins.indicator.inverted,
    );

    let [high, medium, low, start] = &pins.buttons;
    let buttons = ButtonBank::new(
        [
            bank.input(high)?,
            bank.input(medium)?,
            bank.input(low)?,
            bank.input(start)?,
        ],
        pins.buttons.map(|pin| pin.inverted),
    );

    Ok(Board {
        motor,
        annunciator,
        buttons,
    })
}

async fn park() -> ! {
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
