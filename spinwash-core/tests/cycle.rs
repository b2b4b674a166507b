//! End-to-end wash cycle on a simulated millisecond clock
//!
//! Both tick contexts run every simulated millisecond, the foreground polls
//! the scanner every 5 ms, and button presses are held for a realistic time
//! with contact bounce at the start.

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use spinwash_core::alarm::{AlarmOutput, AlarmPattern};
use spinwash_core::config::{parse_config, MachineConfig};
use spinwash_core::input::{Button, ButtonScanner};
use spinwash_core::state::{Event, State};
use spinwash_core::timing::PwmFrame;
use spinwash_core::{Controller, CycleContext, Mode};
use spinwash_hal::Level;

const POLL_MS: u32 = 5;

/// Simulated board: shared context, motor line history, raw button lines
struct Bench {
    ctx: &'static CycleContext,
    frame: PwmFrame,
    now_ms: u32,
    motor_high_ms: u32,
    raw: [bool; 4],
}

impl Bench {
    fn new() -> Self {
        Self {
            ctx: Box::leak(Box::new(CycleContext::new())),
            frame: PwmFrame::new(),
            now_ms: 0,
            motor_high_ms: 0,
            raw: [false; 4],
        }
    }

    /// One millisecond of both tick contexts
    fn tick(&mut self) {
        if self.ctx.pwm_tick(&mut self.frame) == Level::High {
            self.motor_high_ms += 1;
        }
        self.ctx.seconds_tick();
        self.now_ms += 1;
    }

    /// Advance time, running the foreground every poll interval
    fn run(
        &mut self,
        ms: u32,
        scanner: &mut ButtonScanner,
        controller: &mut Controller<'_>,
        events: &mut Vec<Event>,
    ) {
        for _ in 0..ms {
            self.tick();
            if self.now_ms % POLL_MS == 0 {
                if let Some(event) = controller.step(scanner.scan(self.raw)) {
                    events.push(event);
                }
            }
        }
    }

    /// Press and release a button with a few ms of contact bounce
    fn press(
        &mut self,
        button: Button,
        scanner: &mut ButtonScanner,
        controller: &mut Controller<'_>,
        events: &mut Vec<Event>,
    ) {
        let line = usize::from(button.index() - 1);
        for bounce in [true, false, true, false] {
            self.raw[line] = bounce;
            self.run(POLL_MS, scanner, controller, events);
        }
        self.raw[line] = true;
        self.run(200, scanner, controller, events);
        self.raw[line] = false;
        self.run(100, scanner, controller, events);
    }
}

#[derive(Default)]
struct Lines {
    buzzer_toggles: u32,
    indicator_on: bool,
    indicator_blinks: u32,
}

impl AlarmOutput for Lines {
    fn toggle_buzzer(&mut self) {
        self.buzzer_toggles += 1;
    }

    fn buzzer_off(&mut self) {}

    fn set_indicator(&mut self, on: bool) {
        if on && !self.indicator_on {
            self.indicator_blinks += 1;
        }
        self.indicator_on = on;
    }
}

/// Delay that advances a virtual clock instead of waiting
#[derive(Default)]
struct VirtualDelay {
    elapsed_ns: u64,
}

impl DelayNs for VirtualDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

#[test]
fn low_cycle_runs_to_alarm() {
    let mut bench = Bench::new();
    let config = MachineConfig::default();
    let mut scanner = ButtonScanner::new(config.input.debounce_polls);
    let mut controller = Controller::new(bench.ctx, &config);
    let mut events = Vec::new();

    bench.press(Button::Start, &mut scanner, &mut controller, &mut events);
    assert_eq!(controller.state(), State::SelectingMode);

    bench.press(Button::Low, &mut scanner, &mut controller, &mut events);
    assert_eq!(controller.state(), State::Running(Mode::Low));
    assert_eq!(events, [Event::StartPressed, Event::ModeSelected(Mode::Low)]);

    // Motor duty over whole frames while running
    bench.motor_high_ms = 0;
    let frames_start = bench.now_ms;
    bench.run(1_000, &mut scanner, &mut controller, &mut events);
    assert_eq!(bench.now_ms - frames_start, 1_000);
    assert_eq!(bench.motor_high_ms, 300);

    // Run out the 20 s cycle
    bench.run(20_000, &mut scanner, &mut controller, &mut events);
    assert_eq!(controller.state(), State::Complete);
    assert_eq!(events.last(), Some(&Event::ThresholdReached));
    assert_eq!(events.len(), 3);
    assert!(controller.alarm_active());
    assert_eq!(bench.ctx.duty(), 0);
    assert_eq!(controller.screen().line(0), "     Over       ");

    // Motor stays low once complete
    bench.motor_high_ms = 0;
    bench.run(1_000, &mut scanner, &mut controller, &mut events);
    assert_eq!(bench.motor_high_ms, 0);

    // Alarm pattern on a virtual clock
    let pattern = config.alarm.pattern();
    let mut lines = Lines::default();
    let mut delay = VirtualDelay::default();
    for _ in 0..10 {
        block_on(pattern.run_once(&mut lines, &mut delay));
    }
    assert_eq!(lines.buzzer_toggles, 10);
    assert_eq!(lines.indicator_blinks, 10);
    assert!(!lines.indicator_on);
    assert_eq!(delay.elapsed_ns, 10 * 9_000_000);
}

#[test]
fn held_start_button_yields_one_event() {
    let mut bench = Bench::new();
    let config = MachineConfig::default();
    let mut scanner = ButtonScanner::new(config.input.debounce_polls);
    let mut controller = Controller::new(bench.ctx, &config);
    let mut events = Vec::new();

    bench.raw[3] = true;
    bench.run(5_000, &mut scanner, &mut controller, &mut events);
    assert_eq!(events, [Event::StartPressed]);
}

#[test]
fn configured_cycle_with_acknowledge() {
    let config = parse_config(
        "[mode.high]\nduty = 7\nduration_s = 3\n\n[alarm]\nacknowledge_with_start = true\n",
    )
    .unwrap();

    let mut bench = Bench::new();
    let mut scanner = ButtonScanner::new(config.input.debounce_polls);
    let mut controller = Controller::new(bench.ctx, &config);
    let mut events = Vec::new();

    bench.press(Button::Start, &mut scanner, &mut controller, &mut events);
    bench.press(Button::High, &mut scanner, &mut controller, &mut events);
    assert_eq!(bench.ctx.duty(), 7);

    bench.run(3_000, &mut scanner, &mut controller, &mut events);
    assert_eq!(controller.state(), State::Complete);

    bench.press(Button::Start, &mut scanner, &mut controller, &mut events);
    assert_eq!(controller.state(), State::WaitingForStart);
    assert!(!controller.alarm_active());
    assert_eq!(
        events,
        [
            Event::StartPressed,
            Event::ModeSelected(Mode::High),
            Event::ThresholdReached,
            Event::Acknowledge
        ]
    );
}
