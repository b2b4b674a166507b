//! Elapsed-seconds counter
//!
//! Accumulates 1 ms ticks into whole seconds. Field ownership:
//!
//! - `sub_ticks`, `seconds`: written by the seconds tick while running;
//!   written by the foreground only through [`ElapsedCounter::restart`],
//!   [`ElapsedCounter::clear`] and [`ElapsedCounter::stop`], with the tick
//!   gated off first.
//! - `running`: written by the foreground only.
//!
//! Every field is at most one machine word, so single loads and stores are
//! never torn. Read-modify-write goes through separate load/store because the
//! tick context is the only writer while running.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// 1 ms ticks per second
pub const TICKS_PER_SECOND: u16 = 1_000;

/// Tick-to-seconds accumulator shared between the tick and foreground contexts
#[derive(Debug)]
pub struct ElapsedCounter {
    running: AtomicBool,
    sub_ticks: AtomicU16,
    seconds: AtomicU32,
}

impl Default for ElapsedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedCounter {
    /// A stopped counter at zero
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            sub_ticks: AtomicU16::new(0),
            seconds: AtomicU32::new(0),
        }
    }

    /// Advance by one tick
    ///
    /// Called from the seconds tick context only. Returns `true` when this
    /// tick completed a second. Does nothing while stopped.
    pub fn on_tick(&self) -> bool {
        if !self.running.load(Ordering::Acquire) {
            return false;
        }

        let ticks = self.sub_ticks.load(Ordering::Relaxed) + 1;
        if ticks >= TICKS_PER_SECOND {
            self.sub_ticks.store(0, Ordering::Relaxed);
            // Overflow after ~136 years of running is not handled
            let seconds = self.seconds.load(Ordering::Relaxed);
            self.seconds.store(seconds.wrapping_add(1), Ordering::Release);
            true
        } else {
            self.sub_ticks.store(ticks, Ordering::Relaxed);
            false
        }
    }

    /// Whole seconds counted since the last restart
    pub fn seconds(&self) -> u32 {
        self.seconds.load(Ordering::Acquire)
    }

    /// Ticks into the current second
    pub fn sub_ticks(&self) -> u16 {
        self.sub_ticks.load(Ordering::Relaxed)
    }

    /// Check if ticks are being counted
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Zero the counter and start counting
    pub fn restart(&self) {
        self.running.store(false, Ordering::Release);
        self.sub_ticks.store(0, Ordering::Relaxed);
        self.seconds.store(0, Ordering::Release);
        self.running.store(true, Ordering::Release);
    }

    /// Stop counting, keeping the current count
    pub fn halt(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Zero the count
    ///
    /// Only meaningful while halted; a running counter keeps counting from zero.
    pub fn clear(&self) {
        self.sub_ticks.store(0, Ordering::Relaxed);
        self.seconds.store(0, Ordering::Release);
    }

    /// Stop counting and zero the counter
    pub fn stop(&self) {
        self.halt();
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stopped_counter_ignores_ticks() {
        let counter = ElapsedCounter::new();
        for _ in 0..5_000 {
            assert!(!counter.on_tick());
        }
        assert_eq!(counter.seconds(), 0);
        assert_eq!(counter.sub_ticks(), 0);
    }

    #[test]
    fn test_second_boundary() {
        let counter = ElapsedCounter::new();
        counter.restart();

        for _ in 0..999 {
            assert!(!counter.on_tick());
        }
        assert_eq!(counter.seconds(), 0);

        assert!(counter.on_tick());
        assert_eq!(counter.seconds(), 1);
        assert_eq!(counter.sub_ticks(), 0);
    }

    #[test]
    fn test_restart_discards_partial_second() {
        let counter = ElapsedCounter::new();
        counter.restart();
        for _ in 0..2_500 {
            counter.on_tick();
        }
        assert_eq!(counter.seconds(), 2);

        counter.restart();
        assert_eq!(counter.seconds(), 0);
        assert_eq!(counter.sub_ticks(), 0);
        for _ in 0..999 {
            counter.on_tick();
        }
        assert_eq!(counter.seconds(), 0);
    }

    #[test]
    fn test_halt_keeps_count() {
        let counter = ElapsedCounter::new();
        counter.restart();
        for _ in 0..3_000 {
            counter.on_tick();
        }
        counter.halt();
        for _ in 0..3_000 {
            counter.on_tick();
        }
        assert_eq!(counter.seconds(), 3);
        counter.clear();
        assert_eq!(counter.seconds(), 0);
    }

    #[test]
    fn test_stop_clears() {
        let counter = ElapsedCounter::new();
        counter.restart();
        for _ in 0..1_500 {
            counter.on_tick();
        }
        counter.stop();
        assert!(!counter.is_running());
        assert_eq!(counter.seconds(), 0);
        counter.on_tick();
        assert_eq!(counter.sub_ticks(), 0);
    }

    proptest! {
        #[test]
        fn prop_one_second_per_thousand_ticks(ticks in 0u32..20_000) {
            let counter = ElapsedCounter::new();
            counter.restart();
            let mut last = 0;
            for n in 1..=ticks {
                let rolled = counter.on_tick();
                let now = counter.seconds();
                // Only a completed second may change the count, by exactly one
                if rolled {
                    prop_assert_eq!(now, last + 1);
                } else {
                    prop_assert_eq!(now, last);
                }
                prop_assert_eq!(rolled, n % u32::from(TICKS_PER_SECOND) == 0);
                last = now;
            }
            prop_assert_eq!(counter.seconds(), ticks / u32::from(TICKS_PER_SECOND));
        }
    }
}
