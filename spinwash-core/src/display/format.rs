//! Number formatting for the display

use core::fmt::Write;
use heapless::String;

/// Digits in `u32::MAX`
pub const MAX_DIGITS: usize = 10;

/// Render an unsigned value in base 10 without leading zeros
///
/// `0` renders as `"0"`.
pub fn decimal(value: u32) -> String<MAX_DIGITS> {
    let mut out = String::new();
    // Cannot overflow: capacity covers u32::MAX
    let _ = write!(out, "{}", value);
    out
}
