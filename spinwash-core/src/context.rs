//! State shared between the tick contexts and the foreground loop
//!
//! One [`CycleContext`] lives in a `static` and is handed by reference to the
//! PWM tick, the seconds tick and the controller. Nothing else crosses the
//! boundary. Writers per field:
//!
//! | field     | writer                         | readers           |
//! |-----------|--------------------------------|-------------------|
//! | `duty`    | foreground (cycle transitions) | PWM tick          |
//! | `elapsed` | seconds tick (see its module)  | foreground        |
//! | `alarm`   | foreground                     | foreground, tasks |
//!
//! Multi-field transitions run inside a critical section so a tick never
//! observes half of one.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};
use spinwash_hal::Level;

use crate::timing::{ElapsedCounter, PwmFrame};

/// Shared controller context
#[derive(Debug, Default)]
pub struct CycleContext {
    duty: AtomicU8,
    elapsed: ElapsedCounter,
    alarm: AtomicBool,
}

impl CycleContext {
    /// Power-on state: motor off, counter stopped, alarm silent
    pub const fn new() -> Self {
        Self {
            duty: AtomicU8::new(0),
            elapsed: ElapsedCounter::new(),
            alarm: AtomicBool::new(false),
        }
    }

    // --- PWM tick context ---

    /// Duty currently in effect
    pub fn duty(&self) -> u8 {
        self.duty.load(Ordering::Acquire)
    }

    /// Produce the motor line level for the next PWM slot
    pub fn pwm_tick(&self, frame: &mut PwmFrame) -> Level {
        frame.tick(self.duty())
    }

    // --- seconds tick context ---

    /// Advance the elapsed counter by one tick
    ///
    /// Returns `true` when a second completed.
    pub fn seconds_tick(&self) -> bool {
        self.elapsed.on_tick()
    }

    // --- foreground ---

    /// Seconds since the running mode was selected
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed.seconds()
    }

    /// Check if the elapsed counter is counting
    pub fn counter_running(&self) -> bool {
        self.elapsed.is_running()
    }

    /// Check if the completion alarm is active
    pub fn alarm_active(&self) -> bool {
        self.alarm.load(Ordering::Acquire)
    }

    /// Start a cycle: zero and start the counter, then apply the duty
    pub(crate) fn begin_cycle(&self, duty: u8) {
        critical_section::with(|_| {
            self.elapsed.restart();
            self.duty.store(duty, Ordering::Release);
        });
    }

    /// End a cycle
    ///
    /// Inside one critical section: the counter halts, the motor duty drops
    /// to 0, the alarm turns on, `commit` runs (the controller records its new
    /// state there), and finally the counter is zeroed.
    pub(crate) fn finish_cycle<R>(&self, commit: impl FnOnce() -> R) -> R {
        critical_section::with(|_| {
            self.elapsed.halt();
            self.duty.store(0, Ordering::Release);
            self.alarm.store(true, Ordering::Release);
            let result = commit();
            self.elapsed.clear();
            result
        })
    }

    /// Silence the alarm and return to power-on outputs
    pub(crate) fn reset(&self) {
        critical_section::with(|_| {
            self.elapsed.stop();
            self.duty.store(0, Ordering::Release);
            self.alarm.store(false, Ordering::Release);
        });
    }

    /// Stop everything and raise the alarm for a fatal fault
    pub(crate) fn halt(&self) {
        critical_section::with(|_| {
            self.elapsed.stop();
            self.duty.store(0, Ordering::Release);
            self.alarm.store(true, Ordering::Release);
        });
    }
}
