//! Debounced button scanner
//!
//! Each line must read the same value for `stable_polls` consecutive polls
//! before its debounced level changes. A press is reported once, on the
//! debounced released → held transition, and cannot be reported again until
//! the line has debounced back to released.

use crate::mode::{InvalidModeSelection, Mode};

/// Number of operator buttons
pub const BUTTON_COUNT: usize = 4;

/// Operator buttons, numbered as wired (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    High = 1,
    Medium = 2,
    Low = 3,
    Start = 4,
}

impl Button {
    /// All buttons in scan order
    pub const ALL: [Button; BUTTON_COUNT] =
        [Button::High, Button::Medium, Button::Low, Button::Start];

    /// Wiring index (1-4)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Button for a wiring index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// Wash mode this button selects
    pub fn mode(self) -> Result<Mode, InvalidModeSelection> {
        Mode::from_button_index(self.index())
    }
}

/// Debounce state of one line
#[derive(Debug, Clone, Copy)]
struct LineState {
    /// Debounced level (true = held)
    stable: bool,
    /// Last raw reading
    candidate: bool,
    /// Consecutive polls `candidate` has been seen
    count: u8,
}

impl LineState {
    const fn released(stable_polls: u8) -> Self {
        Self {
            stable: false,
            candidate: false,
            count: stable_polls,
        }
    }

    /// Feed one raw reading, returning `true` on a debounced press edge
    fn sample(&mut self, raw: bool, stable_polls: u8) -> bool {
        if raw != self.candidate {
            self.candidate = raw;
            self.count = 1;
        } else if self.count < stable_polls {
            self.count += 1;
        }

        if self.count >= stable_polls && self.candidate != self.stable {
            self.stable = self.candidate;
            return self.stable;
        }
        false
    }
}

/// Four-line debounced edge detector
#[derive(Debug, Clone)]
pub struct ButtonScanner {
    lines: [LineState; BUTTON_COUNT],
    stable_polls: u8,
}

impl Default for ButtonScanner {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ButtonScanner {
    /// Create a scanner with all lines released
    ///
    /// `stable_polls` of 0 is treated as 1 (no filtering).
    pub fn new(stable_polls: u8) -> Self {
        let stable_polls = stable_polls.max(1);
        Self {
            lines: [LineState::released(stable_polls); BUTTON_COUNT],
            stable_polls,
        }
    }

    /// Feed one poll of raw readings and return at most one new press
    ///
    /// `held[i]` is true when button `i + 1` reads pressed (polarity already
    /// applied). Every line is updated on every poll; if several lines edge
    /// in the same poll the lowest index wins and the rest are dropped.
    pub fn scan(&mut self, held: [bool; BUTTON_COUNT]) -> Option<Button> {
        let mut pressed = None;
        for (i, (line, raw)) in self.lines.iter_mut().zip(held).enumerate() {
            if line.sample(raw, self.stable_polls) && pressed.is_none() {
                pressed = Some(Button::ALL[i]);
            }
        }
        pressed
    }

    /// Debounced level of a button
    pub fn is_held(&self, button: Button) -> bool {
        self.lines[usize::from(button.index() - 1)].stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [bool; 4] = [false; 4];

    fn only(button: Button) -> [bool; 4] {
        let mut held = NONE;
        held[usize::from(button.index() - 1)] = true;
        held
    }

    #[test]
    fn test_button_indices() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index(), i as u8 + 1);
            assert_eq!(Button::from_index(i as u8 + 1), Some(*button));
        }
        assert_eq!(Button::from_index(0), None);
        assert_eq!(Button::from_index(5), None);
        assert_eq!(Button::Start.mode(), Err(InvalidModeSelection(4)));
        assert_eq!(Button::Low.mode(), Ok(Mode::Low));
    }

    #[test]
    fn test_press_needs_stable_polls() {
        let mut scanner = ButtonScanner::new(3);
        assert_eq!(scanner.scan(only(Button::Start)), None);
        assert_eq!(scanner.scan(only(Button::Start)), None);
        assert_eq!(scanner.scan(only(Button::Start)), Some(Button::Start));
        assert!(scanner.is_held(Button::Start));
    }

    #[test]
    fn test_held_button_reports_once() {
        let mut scanner = ButtonScanner::new(2);
        let mut events = 0;
        for _ in 0..100 {
            if scanner.scan(only(Button::High)).is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 1);
    }

    #[test]
    fn test_bounce_is_filtered() {
        let mut scanner = ButtonScanner::new(3);
        let bounce = [true, false, true, false, true, true, false];
        for raw in bounce {
            let mut held = NONE;
            held[1] = raw;
            assert_eq!(scanner.scan(held), None);
        }
        assert!(!scanner.is_held(Button::Medium));
    }

    #[test]
    fn test_release_rearms() {
        let mut scanner = ButtonScanner::new(1);
        assert_eq!(scanner.scan(only(Button::Low)), Some(Button::Low));
        assert_eq!(scanner.scan(only(Button::Low)), None);
        assert_eq!(scanner.scan(NONE), None);
        assert!(!scanner.is_held(Button::Low));
        assert_eq!(scanner.scan(only(Button::Low)), Some(Button::Low));
    }

    #[test]
    fn test_short_release_does_not_rearm() {
        let mut scanner = ButtonScanner::new(3);
        for _ in 0..3 {
            scanner.scan(only(Button::Start));
        }
        // A one-poll dropout is bounce, not a release
        assert_eq!(scanner.scan(NONE), None);
        for _ in 0..10 {
            assert_eq!(scanner.scan(only(Button::Start)), None);
        }
    }

    #[test]
    fn test_simultaneous_edges_report_lowest() {
        let mut scanner = ButtonScanner::new(1);
        let held = [false, true, false, true];
        assert_eq!(scanner.scan(held), Some(Button::Medium));
        // Start debounced as held alongside, so it does not report later
        assert_eq!(scanner.scan(held), None);
        assert!(scanner.is_held(Button::Start));
    }

    #[test]
    fn test_zero_stable_polls_behaves_as_one() {
        let mut scanner = ButtonScanner::new(0);
        assert_eq!(scanner.scan(only(Button::High)), Some(Button::High));
    }
}
