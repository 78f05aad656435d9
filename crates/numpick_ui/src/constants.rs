//! Centralized defaults for the number picker
//!
//! All magic numbers used by the picker are defined here so the value state,
//! the controller and the text filter agree on them.

use std::time::Duration;

// =============================================================================
// Range & Step
// =============================================================================

/// Default inclusive lower bound
pub const DEFAULT_START: f64 = 1.0;

/// Default inclusive upper bound
pub const DEFAULT_END: f64 = 10.0;

/// Default increment/decrement delta
pub const DEFAULT_STEP: f64 = 1.0;

/// Upper bound sentinel meaning "no maximum"
pub const UNBOUNDED_END_SENTINEL: i64 = -1;

/// Internal representation of an unbounded upper bound
pub const UNBOUNDED_END: f64 = f64::MAX;

// =============================================================================
// Precision
// =============================================================================

/// Default number of decimal places shown
pub const DEFAULT_PRECISION: u32 = 0;

/// Comparison tolerance used when no decimals are shown
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Value produced when text cannot be parsed as a number.
///
/// This is the smallest positive subnormal double, so anything that rounds to
/// zero at the current precision is treated as unparsable by the text filter.
pub const INVALID_VALUE: f64 = f64::from_bits(1);

// =============================================================================
// Auto-repeat
// =============================================================================

/// Default interval between long-press repeat ticks in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 300;

/// Default interval between long-press repeat ticks
pub const DEFAULT_SPEED: Duration = Duration::from_millis(DEFAULT_SPEED_MS);

// =============================================================================
// Text Filter
// =============================================================================

/// Characters the text field accepts from the keyboard
pub const ACCEPTED_CHARS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

/// Check whether a character may be typed into the text field
#[inline]
pub fn is_accepted_char(c: char) -> bool {
    ACCEPTED_CHARS.contains(&c)
}

// =============================================================================
// Number Formatting
// =============================================================================

/// Comparison tolerance for a number of decimal places.
///
/// `places <= 0` falls back to [`DEFAULT_EPSILON`], otherwise `10^-places`.
pub fn epsilon_for_precision(places: i32) -> f64 {
    if places <= 0 {
        DEFAULT_EPSILON
    } else {
        (0..places).fold(1.0, |eps, _| eps / 10.0)
    }
}

/// Format a number with a fixed number of decimal places
pub fn format_number(value: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, value)
}

/// Parse picker text, yielding [`INVALID_VALUE`] when it is not a number
pub fn parse_or_invalid(text: &str) -> f64 {
    text.parse().unwrap_or(INVALID_VALUE)
}
