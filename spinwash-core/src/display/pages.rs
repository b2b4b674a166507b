//! Screens for each cycle state
//!
//! Layouts follow the stock panel text of the appliance.

use super::format::decimal;
use super::screen::Screen;
use crate::mode::Mode;
use crate::state::Fault;

impl Screen {
    /// Power-on prompt
    pub fn render_waiting(&mut self) {
        self.clear();
        self.show_str(0, 0, "Press Start");
        self.show_str(5, 1, "Waiting...");
    }

    /// Mode selection prompt
    pub fn render_select(&mut self) {
        self.clear();
        self.show_str(2, 0, "Select Mode:");
        self.show_str(2, 1, "HI/MED/LOW");
    }

    /// Running layout, with the counter at 0
    pub fn render_running(&mut self, mode: Mode) {
        self.clear();
        self.show_str(2, 0, "Mode: ");
        self.show_str(8, 0, mode.label());
        self.show_str(2, 1, "Time:");
        self.show_str(12, 1, "s");
        self.render_elapsed(0);
    }

    /// Update the seconds field of the running layout
    pub fn render_elapsed(&mut self, seconds: u32) {
        self.show_str(8, 1, &decimal(seconds));
    }

    /// Cycle finished
    pub fn render_complete(&mut self) {
        self.clear();
        self.show_str(5, 0, "Over");
    }

    /// Fatal fault
    pub fn render_fault(&mut self, fault: Fault) {
        self.clear();
        self.show_str(5, 0, "FAULT");
        self.show_str(2, 1, fault.label());
    }
}
