//! Build script for spinwash-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates washer.toml at compile time

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections the firmware parser accepts
const SECTIONS: &[&str] = &["mode", "input", "alarm", "pins"];
/// Mode subsections
const MODES: &[&str] = &["high", "medium", "low"];
/// Pin keys
const PINS: &[&str] = &["motor", "buzzer", "indicator", "high", "medium", "low", "start"];
/// Highest RP2040 GPIO
const MAX_GPIO: i64 = 29;
/// Slots per PWM frame
const SLOTS_PER_FRAME: i64 = 10;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate washer.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=washer.toml");

    let config_path = Path::new("washer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: washer.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds washer.toml at build time.                  ║\n\
            ║  Please create one in the spinwash-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read washer.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in washer.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_modes(&config, &mut errors);
    validate_input(&config, &mut errors);
    validate_alarm(&config, &mut errors);
    validate_pins(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in washer.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=washer.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        _ => None,
    }
}

/// Reject sections the firmware parser would refuse
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };
    for (name, value) in root {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a [section]", name));
        }
    }
    if let Some(modes) = table(config, "mode") {
        for name in modes.keys() {
            if !MODES.contains(&name.as_str()) {
                errors.push(format!("unknown mode [mode.{}]", name));
            }
        }
    }
}

/// Check an optional integer key against a range
fn check_int(
    section: &str,
    values: &toml::value::Table,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match values.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn validate_modes(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(modes) = table(config, "mode") else {
        return;
    };
    for (name, mode) in modes {
        let section = format!("mode.{}", name);
        let Some(mode) = mode.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };
        check_int(&section, mode, "duty", 0, SLOTS_PER_FRAME - 1, errors);
        check_int(&section, mode, "duration_s", 1, i64::from(u32::MAX), errors);
    }
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(input) = table(config, "input") else {
        return;
    };
    check_int("input", input, "debounce_polls", 1, i64::from(u8::MAX), errors);
    check_int("input", input, "poll_interval_ms", 1, i64::from(u16::MAX), errors);
}

fn validate_alarm(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(alarm) = table(config, "alarm") else {
        return;
    };
    check_int("alarm", alarm, "hold_us", 1, i64::from(u32::MAX), errors);
    match alarm.get("acknowledge_with_start") {
        None | Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push("[alarm] acknowledge_with_start must be true or false".into()),
    }
}

fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = table(config, "pins") else {
        return;
    };

    let mut used: BTreeMap<i64, &str> = BTreeMap::new();
    for (key, value) in pins {
        if !PINS.contains(&key.as_str()) {
            errors.push(format!("[pins] unknown pin '{}'", key));
            continue;
        }
        let Some(pin_str) = value.as_str() else {
            errors.push(format!("[pins] {} must be a string like \"gpio2\"", key));
            continue;
        };
        match parse_pin_number(pin_str) {
            Some(num) => {
                if let Some(other) = used.insert(num, key) {
                    errors.push(format!("[pins] gpio{} used by both {} and {}", num, other, key));
                }
            }
            None => errors.push(format!("[pins] {} = \"{}\" is not a valid pin", key, pin_str)),
        }
    }
}

/// Strip `!`/`^` modifiers and return the GPIO number
fn parse_pin_number(s: &str) -> Option<i64> {
    let num = s.trim_start_matches(['!', '^']).strip_prefix("gpio")?;
    let num: i64 = num.parse().ok()?;
    (0..=MAX_GPIO).contains(&num).then_some(num)
}
