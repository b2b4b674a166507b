//! State machine definition

use super::events::Event;
use crate::mode::Mode;

/// Cycle controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on state, start prompt visible
    #[default]
    WaitingForStart,
    /// Start pressed, waiting for a mode button
    SelectingMode,
    /// Motor driven at the mode's duty, counter running
    Running(Mode),
    /// Cycle finished, alarm active
    Complete,
    /// Fatal fault; motor off, alarm active, no way out but reset
    Halted(Fault),
}

/// Fatal faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Tick timer could not be started
    TimerInit,
    /// A GPIO or other peripheral could not be claimed
    PeripheralInit,
    /// Configuration rejected at boot
    InvalidConfig,
}

impl Fault {
    /// Short text for the display
    pub fn label(&self) -> &'static str {
        match self {
            Fault::TimerInit => "Timer",
            Fault::PeripheralInit => "Peripheral",
            Fault::InvalidConfig => "Config",
        }
    }
}

impl State {
    /// Check if this state allows the motor to run
    pub fn motor_allowed(&self) -> bool {
        matches!(self, State::Running(_))
    }

    /// Check if this state keeps the alarm sounding
    pub fn alarm_expected(&self) -> bool {
        matches!(self, State::Complete | State::Halted(_))
    }

    /// Check if this is the fault state
    pub fn is_halted(&self) -> bool {
        matches!(self, State::Halted(_))
    }

    /// Mode being run, `Mode::Idle` outside a cycle
    pub fn active_mode(&self) -> Mode {
        match self {
            State::Running(mode) => *mode,
            _ => Mode::Idle,
        }
    }

    /// Process an event and return the next state
    ///
    /// Events that have no meaning in the current state leave it unchanged.
    /// `Halted` is absorbing.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Halted(_), _) => self,
            (_, FaultDetected(fault)) => Halted(fault),

            (WaitingForStart, StartPressed) => SelectingMode,

            (SelectingMode, ModeSelected(Mode::Idle)) => self,
            (SelectingMode, ModeSelected(mode)) => Running(mode),

            (Running(_), ThresholdReached) => Complete,

            (Complete, Acknowledge) => WaitingForStart,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let state = State::default();
        assert_eq!(state, State::WaitingForStart);

        let selecting = state.transition(Event::StartPressed);
        assert_eq!(selecting, State::SelectingMode);

        let running = selecting.transition(Event::ModeSelected(Mode::High));
        assert_eq!(running, State::Running(Mode::High));
        assert!(running.motor_allowed());

        let complete = running.transition(Event::ThresholdReached);
        assert_eq!(complete, State::Complete);
        assert!(complete.alarm_expected());
        assert!(!complete.motor_allowed());
    }

    #[test]
    fn test_mode_buttons_ignored_before_start() {
        for mode in [Mode::High, Mode::Medium, Mode::Low] {
            let next = State::WaitingForStart.transition(Event::ModeSelected(mode));
            assert_eq!(next, State::WaitingForStart);
        }
    }

    #[test]
    fn test_idle_is_not_selectable() {
        let next = State::SelectingMode.transition(Event::ModeSelected(Mode::Idle));
        assert_eq!(next, State::SelectingMode);
    }

    #[test]
    fn test_buttons_ignored_while_running() {
        let running = State::Running(Mode::Medium);
        assert_eq!(running.transition(Event::StartPressed), running);
        assert_eq!(running.transition(Event::ModeSelected(Mode::High)), running);
        assert_eq!(running.transition(Event::Acknowledge), running);
    }

    #[test]
    fn test_acknowledge_only_from_complete() {
        assert_eq!(
            State::Complete.transition(Event::Acknowledge),
            State::WaitingForStart
        );
        assert_eq!(
            State::SelectingMode.transition(Event::Acknowledge),
            State::SelectingMode
        );
        assert_eq!(
            State::Complete.transition(Event::StartPressed),
            State::Complete
        );
    }

    #[test]
    fn test_fault_from_any_state() {
        let states = [
            State::WaitingForStart,
            State::SelectingMode,
            State::Running(Mode::Low),
            State::Complete,
        ];

        for state in states {
            let next = state.transition(Event::FaultDetected(Fault::PeripheralInit));
            assert_eq!(next, State::Halted(Fault::PeripheralInit));
        }
    }

    #[test]
    fn test_halted_is_absorbing() {
        let halted = State::Halted(Fault::TimerInit);
        let events = [
            Event::StartPressed,
            Event::ModeSelected(Mode::High),
            Event::ThresholdReached,
            Event::Acknowledge,
            Event::FaultDetected(Fault::InvalidConfig),
        ];
        for event in events {
            assert_eq!(halted.transition(event), halted);
        }
        assert!(halted.alarm_expected());
        assert!(halted.is_halted());
    }

    #[test]
    fn test_active_mode() {
        assert_eq!(State::Running(Mode::Low).active_mode(), Mode::Low);
        assert_eq!(State::Complete.active_mode(), Mode::Idle);
        assert_eq!(State::SelectingMode.active_mode(), Mode::Idle);
    }
}
