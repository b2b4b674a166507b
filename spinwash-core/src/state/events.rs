//! Events that trigger state transitions

use super::machine::Fault;
use crate::mode::Mode;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Operator events
    /// Start button pressed
    StartPressed,
    /// Mode button pressed while a mode is being chosen
    ModeSelected(Mode),
    /// Operator silenced the completion alarm
    Acknowledge,

    // Timing events
    /// Elapsed seconds reached the running mode's duration
    ThresholdReached,

    // Safety events
    /// Fatal hardware or configuration fault
    FaultDetected(Fault),
}

impl Event {
    /// Check if this event comes from a button press
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::StartPressed | Event::ModeSelected(_) | Event::Acknowledge
        )
    }

    /// Check if this event indicates a fault
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::FaultDetected(_))
    }
}
