//! Software PWM frame
//!
//! The motor line is regenerated one slot per tick. A frame is
//! [`SLOTS_PER_FRAME`] slots long and the line is HIGH for the first `duty`
//! slots of every frame.

use spinwash_hal::Level;

/// Slots in one PWM period
pub const SLOTS_PER_FRAME: u8 = 10;

/// Position inside the current PWM frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmFrame {
    slot: u8,
}

impl PwmFrame {
    pub const fn new() -> Self {
        Self { slot: 0 }
    }

    /// Current slot (0-9)
    pub fn slot(&self) -> u8 {
        self.slot
    }

    /// Output level for the current slot, then advance one slot
    ///
    /// Duties above the frame length saturate to a fully HIGH frame.
    pub fn tick(&mut self, duty: u8) -> Level {
        let level = Level::from(self.slot < duty);
        self.slot += 1;
        if self.slot >= SLOTS_PER_FRAME {
            self.slot = 0;
        }
        level
    }
}
