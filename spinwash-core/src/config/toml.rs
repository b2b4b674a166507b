//! Simple TOML parser for machine configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the washer configuration. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] and [section.subsection] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys outside section headers
//!
//! Unknown keys inside a known section are ignored so older firmware can
//! read newer files. Unknown sections are rejected.

use crate::config::types::{MachineConfig, PinConfig, MAX_GPIO};
use crate::mode::Mode;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Values parsed but the resulting configuration is unusable
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Mode(Mode),
    Input,
    Alarm,
    Pins,
}

/// Parse TOML configuration into MachineConfig
///
/// Starts from [`MachineConfig::default`] and overrides whatever the input
/// sets. The result is validated before it is returned.
pub fn parse_config(input: &str) -> Result<MachineConfig, ParseError> {
    let mut config = MachineConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let Some((key, value)) = parse_key_value(line) else {
            return Err(ParseError::InvalidValue);
        };
        apply_value(section, key, value, &mut config)?;
    }

    if !config.is_valid() {
        return Err(ParseError::OutOfRange);
    }

    Ok(config)
}

/// Parse section header like "alarm" or "mode.high"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "mode.high" => Ok(Section::Mode(Mode::High)),
        "mode.medium" => Ok(Section::Mode(Mode::Medium)),
        "mode.low" => Ok(Section::Mode(Mode::Low)),
        "input" => Ok(Section::Input),
        "alarm" => Ok(Section::Alarm),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Apply one key/value pair to the section being parsed
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MachineConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Mode(mode) => {
            let Some(profile) = config.modes.profile_mut(mode) else {
                return Err(ParseError::InvalidSection);
            };
            match key {
                "duty" => profile.duty = parse_int(value)?,
                "duration_s" => profile.duration_s = parse_int(value)?,
                _ => {}
            }
        }
        Section::Input => match key {
            "debounce_polls" => config.input.debounce_polls = parse_int(value)?,
            "poll_interval_ms" => config.input.poll_interval_ms = parse_int(value)?,
            _ => {}
        },
        Section::Alarm => match key {
            "hold_us" => config.alarm.hold_us = parse_int(value)?,
            "acknowledge_with_start" => config.alarm.acknowledge_with_start = parse_bool(value)?,
            _ => {}
        },
        Section::Pins => {
            let pins = &mut config.pins;
            match key {
                "motor" => pins.motor = parse_pin(value)?,
                "buzzer" => pins.buzzer = parse_pin(value)?,
                "indicator" => pins.indicator = parse_pin(value)?,
                "high" => pins.buttons[0] = parse_pin(value)?,
                "medium" => pins.buttons[1] = parse_pin(value)?,
                "low" => pins.buttons[2] = parse_pin(value)?,
                "start" => pins.buttons[3] = parse_pin(value)?,
                _ => {}
            }
        }
    }
    Ok(())
}

/// Drop a trailing comment unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(hash_pos) if line[..hash_pos].matches('"').count() % 2 == 0 => {
            line[..hash_pos].trim()
        }
        _ => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value, accepting `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits = heapless::String::<16>::new();
    for c in value.chars().filter(|c| *c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4", "!^gpio10"
///
/// `!` marks the pin active-low, `^` enables the internal pull-up.
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull_up = false;

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin > MAX_GPIO {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}
