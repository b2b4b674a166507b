//! Embedded configuration loader

use defmt::*;

use spinwash_core::config::{parse_config, MachineConfig, ParseError};
use spinwash_core::Mode;

/// Embedded configuration (compiled into firmware)
/// Edit washer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../washer.toml");

/// Parse the embedded configuration
///
/// build.rs validates the same file, so an error here means the host and
/// target parsers disagree.
pub fn load_embedded() -> Result<MachineConfig, ParseError> {
    let config = parse_config(EMBEDDED_CONFIG)?;
    info!("Parsed embedded configuration successfully");
    log_config(&config);
    Ok(config)
}

fn log_config(config: &MachineConfig) {
    for mode in [Mode::High, Mode::Medium, Mode::Low] {
        let profile = config.modes.profile(mode);
        info!(
            "Mode {}: duty {}/10, {}s",
            mode.label(),
            profile.duty,
            profile.duration_s
        );
    }
    debug!(
        "Input: debounce {} polls every {}ms",
        config.input.debounce_polls, config.input.poll_interval_ms
    );
    debug!(
        "Alarm: hold {}us, acknowledge_with_start={}",
        config.alarm.hold_us, config.alarm.acknowledge_with_start
    );
}
