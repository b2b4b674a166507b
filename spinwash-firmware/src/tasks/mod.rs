//! Embassy async tasks
//!
//! The two tick tasks share only the cycle context with the controller.
//! Everything else goes through channels/signals.

pub mod controller;
pub mod display;
pub mod event_log;
pub mod pwm;
pub mod seconds;

pub use controller::{controller_task, publish_fault};
pub use display::display_task;
pub use event_log::event_log_task;
pub use pwm::pwm_task;
pub use seconds::seconds_task;
