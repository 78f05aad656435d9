//! State owned by a number picker

use std::time::Duration;

use crate::constants::{
    epsilon_for_precision, DEFAULT_END, DEFAULT_EPSILON, DEFAULT_PRECISION, DEFAULT_SPEED,
    DEFAULT_START, DEFAULT_STEP, UNBOUNDED_END, UNBOUNDED_END_SENTINEL,
};
use crate::filter::NumberRangeFilter;

// =============================================================================
// Value State
// =============================================================================

/// Bounds, current value and stepping configuration of a picker.
///
/// `start <= current <= end` holds after every committed change. Setters such
/// as [`set_current`](Self::set_current) store what they are given without
/// checking it.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    /// Inclusive lower bound
    pub start: f64,
    /// Inclusive upper bound ([`UNBOUNDED_END`] when there is no maximum)
    pub end: f64,
    /// Active value
    pub current: f64,
    /// Value before the last committed change
    pub previous: f64,
    /// Increment/decrement delta
    pub step: f64,
    /// Decimal places shown
    pub precision: u32,
    /// Tolerance for equality checks, derived from `precision`
    pub epsilon: f64,
    /// Interval between long-press repeat ticks
    pub speed: Duration,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            current: DEFAULT_START,
            previous: DEFAULT_START,
            step: DEFAULT_STEP,
            precision: DEFAULT_PRECISION,
            epsilon: DEFAULT_EPSILON,
            speed: DEFAULT_SPEED,
        }
    }
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set integer bounds and reset the value to `start`.
    ///
    /// An `end` of `-1` means there is no maximum.
    pub fn set_range(&mut self, start: i64, end: i64) {
        self.start = start as f64;
        self.end = if end == UNBOUNDED_END_SENTINEL {
            UNBOUNDED_END
        } else {
            end as f64
        };
        self.current = self.start;
    }

    /// Set real bounds and reset the value to `start`.
    ///
    /// An `end` within `epsilon` of `-1` means there is no maximum.
    pub fn set_float_range(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = if (end - UNBOUNDED_END_SENTINEL as f64).abs() < self.epsilon {
            UNBOUNDED_END
        } else {
            end
        };
        self.current = start;
    }

    /// Set the number of decimal places; `places <= 0` shows none
    pub fn set_precision(&mut self, places: i32) {
        self.precision = places.max(0).unsigned_abs();
        self.epsilon = epsilon_for_precision(places);
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Whether the upper bound is the "no maximum" marker
    pub fn is_unbounded(&self) -> bool {
        self.end == UNBOUNDED_END
    }

    /// Whether `value` lies inside the inclusive bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Map a proposed value onto the range.
    ///
    /// Past the upper bound wraps to `start`, below the lower bound wraps to
    /// `end`. There is no clamping mode.
    pub fn wrap(&self, value: f64) -> f64 {
        if value > self.end {
            self.start
        } else if value < self.start {
            self.end
        } else {
            value
        }
    }

    /// Record a committed change. Returns `(previous, current)`.
    pub fn commit(&mut self, value: f64) -> (f64, f64) {
        self.previous = self.current;
        self.current = value;
        (self.previous, self.current)
    }

    /// Whether `value` differs from `current` by more than `epsilon`
    pub fn differs(&self, value: f64) -> bool {
        (self.current - value).abs() > self.epsilon
    }

    /// Keystroke filter matching the current bounds and precision
    pub fn filter(&self) -> NumberRangeFilter {
        NumberRangeFilter::new(self.end, self.epsilon)
    }
}

// =============================================================================
// Text Field State
// =============================================================================

/// Editable text shown by the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFieldState {
    /// The current text being edited
    pub text: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Whether the field is focused
    pub is_focused: bool,
    /// Selection range (anchor, active) if any
    pub selection: Option<(usize, usize)>,
}

impl TextFieldState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            is_focused: false,
            selection: None,
        }
    }

    /// Replace the text, move the caret to the end and drop the selection
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
        self.selection = None;
    }

    /// Focus the field, selecting all text
    pub fn focus(&mut self) {
        self.is_focused = true;
        if !self.text.is_empty() {
            self.selection = Some((0, self.text.len()));
            self.cursor = self.text.len();
        }
    }

    /// Blur the field
    pub fn blur(&mut self) {
        self.is_focused = false;
        self.selection = None;
    }
}
