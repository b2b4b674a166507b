//! Foreground cycle controller
//!
//! The controller is the only foreground writer of the shared context. Each
//! loop iteration it:
//! - Turns a debounced button press into a state machine event
//! - Compares the elapsed seconds against the running mode's duration
//! - Applies the side effects of a transition (duty, counter, alarm)
//! - Redraws its screen buffer
//!
//! Driving the alarm lines and the physical display is left to the caller,
//! which checks [`Controller::alarm_active`] and [`Controller::take_screen`].

use crate::config::MachineConfig;
use crate::context::CycleContext;
use crate::display::Screen;
use crate::input::Button;
use crate::mode::{Mode, ModeTable};
use crate::state::{Event, Fault, State};

/// Cycle controller bound to one shared context
pub struct Controller<'a> {
    /// Tick-shared state
    ctx: &'a CycleContext,
    /// Mode → (duty, duration) lookup
    modes: ModeTable,
    /// Start press in `Complete` silences the alarm
    acknowledge_with_start: bool,
    /// Current machine state
    state: State,
    /// Panel contents
    screen: Screen,
    /// Seconds value last drawn while running
    shown_seconds: Option<u32>,
}

impl<'a> Controller<'a> {
    /// Create a controller in `WaitingForStart` with the start prompt drawn
    pub fn new(ctx: &'a CycleContext, config: &MachineConfig) -> Self {
        let mut screen = Screen::new();
        screen.render_waiting();
        Self {
            ctx,
            modes: config.modes,
            acknowledge_with_start: config.alarm.acknowledge_with_start,
            state: State::WaitingForStart,
            screen,
            shown_seconds: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Mode being run, `Mode::Idle` outside a cycle
    pub fn active_mode(&self) -> Mode {
        self.state.active_mode()
    }

    /// Check if the alarm pattern should be running
    pub fn alarm_active(&self) -> bool {
        self.ctx.alarm_active()
    }

    /// Current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Screen buffer, if it changed since the last call
    pub fn take_screen(&mut self) -> Option<&Screen> {
        if self.screen.take_dirty() {
            Some(&self.screen)
        } else {
            None
        }
    }

    /// Run one foreground iteration
    ///
    /// `button` is the scanner's result for this poll. Returns the event
    /// that changed the state, if any.
    pub fn step(&mut self, button: Option<Button>) -> Option<Event> {
        let from_button = button.and_then(|button| self.handle_button(button));
        from_button.or_else(|| self.poll_elapsed())
    }

    /// Handle a debounced press
    pub fn handle_button(&mut self, button: Button) -> Option<Event> {
        match (self.state, button) {
            (State::WaitingForStart, Button::Start) => self.apply(Event::StartPressed),
            (State::SelectingMode, Button::Start) => None,
            (State::SelectingMode, button) => {
                let mode = button.mode();
                debug_assert!(mode.is_ok());
                self.apply(Event::ModeSelected(mode.ok()?))
            }
            (State::Complete, Button::Start) if self.acknowledge_with_start => {
                self.apply(Event::Acknowledge)
            }
            _ => None,
        }
    }

    /// Check the running cycle against its duration and refresh the counter
    pub fn poll_elapsed(&mut self) -> Option<Event> {
        let State::Running(mode) = self.state else {
            return None;
        };

        let seconds = self.ctx.elapsed_seconds();
        if seconds >= self.modes.profile(mode).duration_s {
            return self.apply(Event::ThresholdReached);
        }

        if self.shown_seconds != Some(seconds) {
            self.screen.render_elapsed(seconds);
            self.shown_seconds = Some(seconds);
        }
        None
    }

    /// Enter the fault state
    pub fn fault(&mut self, fault: Fault) -> Option<Event> {
        self.apply(Event::FaultDetected(fault))
    }

    /// Perform a state transition and its side effects
    fn apply(&mut self, event: Event) -> Option<Event> {
        let next = self.state.transition(event);
        if next == self.state {
            return None;
        }

        let ctx = self.ctx;
        match event {
            Event::StartPressed => {
                self.state = next;
                self.screen.render_select();
            }
            Event::ModeSelected(mode) => {
                let profile = self.modes.profile(mode);
                ctx.begin_cycle(profile.duty);
                self.state = next;
                self.screen.render_running(mode);
                self.shown_seconds = Some(0);
            }
            Event::ThresholdReached => {
                ctx.finish_cycle(|| self.state = next);
                self.shown_seconds = None;
                self.screen.render_complete();
            }
            Event::Acknowledge => {
                ctx.reset();
                self.state = next;
                self.screen.render_waiting();
            }
            Event::FaultDetected(fault) => {
                ctx.halt();
                self.state = next;
                self.shown_seconds = None;
                self.screen.render_fault(fault);
            }
        }
        Some(event)
    }
}
