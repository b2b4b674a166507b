//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! The tick tasks never touch these; they share only the cycle context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use spinwash_core::display::Screen;
use spinwash_core::state::{Event, State};

/// Channel capacity for state events
const STATE_CHANNEL_SIZE: usize = 8;

/// State transitions (event, resulting state) for logging
pub static STATE_CHANNEL: Channel<CriticalSectionRawMutex, (Event, State), STATE_CHANNEL_SIZE> =
    Channel::new();

/// Signal that the screen buffer changed
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());
