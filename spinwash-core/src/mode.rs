//! Wash modes
//!
//! A mode is a fixed pairing of motor duty (out of a 10-slot PWM frame) and
//! cycle duration. The pairing is policy, looked up from a [`ModeTable`].

use crate::timing::pwm::SLOTS_PER_FRAME;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selected wash intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Motor off, no cycle
    #[default]
    Idle,
    High,
    Medium,
    Low,
}

/// A button index that does not name a wash mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidModeSelection(pub u8);

impl Mode {
    /// Map a mode button (1 = High, 2 = Medium, 3 = Low) to its mode
    pub fn from_button_index(index: u8) -> Result<Self, InvalidModeSelection> {
        match index {
            1 => Ok(Mode::High),
            2 => Ok(Mode::Medium),
            3 => Ok(Mode::Low),
            other => Err(InvalidModeSelection(other)),
        }
    }

    /// Short label shown on the display
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::High => "HI",
            Mode::Medium => "MED",
            Mode::Low => "LOW",
        }
    }
}

/// Duty and duration for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModeProfile {
    /// HIGH slots per PWM frame (0-9)
    pub duty: u8,
    /// Cycle length in seconds
    pub duration_s: u32,
}

impl ModeProfile {
    /// Motor off
    pub const IDLE: Self = Self {
        duty: 0,
        duration_s: 0,
    };

    pub const fn new(duty: u8, duration_s: u32) -> Self {
        Self { duty, duration_s }
    }

    /// Check the duty fits inside a PWM frame and the duration is non-zero
    pub fn is_valid(&self) -> bool {
        self.duty < SLOTS_PER_FRAME && self.duration_s > 0
    }
}

/// Mode → profile lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModeTable {
    pub high: ModeProfile,
    pub medium: ModeProfile,
    pub low: ModeProfile,
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            high: ModeProfile::new(9, 60),
            medium: ModeProfile::new(5, 30),
            low: ModeProfile::new(3, 20),
        }
    }
}

impl ModeTable {
    /// Look up the profile for a mode
    pub fn profile(&self, mode: Mode) -> ModeProfile {
        match mode {
            Mode::Idle => ModeProfile::IDLE,
            Mode::High => self.high,
            Mode::Medium => self.medium,
            Mode::Low => self.low,
        }
    }

    /// Mutable access to a selectable mode's profile
    pub fn profile_mut(&mut self, mode: Mode) -> Option<&mut ModeProfile> {
        match mode {
            Mode::Idle => None,
            Mode::High => Some(&mut self.high),
            Mode::Medium => Some(&mut self.medium),
            Mode::Low => Some(&mut self.low),
        }
    }

    /// Check all selectable modes
    pub fn is_valid(&self) -> bool {
        self.high.is_valid() && self.medium.is_valid() && self.low.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ModeTable::default();
        assert_eq!(table.profile(Mode::High), ModeProfile::new(9, 60));
        assert_eq!(table.profile(Mode::Medium), ModeProfile::new(5, 30));
        assert_eq!(table.profile(Mode::Low), ModeProfile::new(3, 20));
        assert_eq!(table.profile(Mode::Idle).duty, 0);
        assert!(table.is_valid());
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(Mode::from_button_index(1), Ok(Mode::High));
        assert_eq!(Mode::from_button_index(2), Ok(Mode::Medium));
        assert_eq!(Mode::from_button_index(3), Ok(Mode::Low));
        assert_eq!(Mode::from_button_index(4), Err(InvalidModeSelection(4)));
        assert_eq!(Mode::from_button_index(0), Err(InvalidModeSelection(0)));
    }

    #[test]
    fn test_profile_validation() {
        assert!(ModeProfile::new(0, 1).is_valid());
        assert!(ModeProfile::new(9, 60).is_valid());
        // A duty of 10 would keep the line high for the whole frame
        assert!(!ModeProfile::new(10, 60).is_valid());
        assert!(!ModeProfile::new(5, 0).is_valid());
    }

    #[test]
    fn test_idle_has_no_profile_slot() {
        let mut table = ModeTable::default();
        assert!(table.profile_mut(Mode::Idle).is_none());
        if let Some(low) = table.profile_mut(Mode::Low) {
            low.duration_s = 15;
        }
        assert_eq!(table.profile(Mode::Low).duration_s, 15);
    }
}
