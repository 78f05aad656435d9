//! Keystroke filter for the picker's text field
//!
//! Every edit replaces a byte range of the current text with some inserted
//! text. The filter decides what actually gets inserted:
//!
//! 1. Characters outside [`ACCEPTED_CHARS`](crate::constants::ACCEPTED_CHARS)
//!    are dropped from the insertion.
//! 2. The text that would result from the edit is composed.
//! 3. An empty result is always allowed.
//! 4. A result above the upper bound, or one that does not parse, is rejected
//!    and nothing is inserted.
//!
//! The lower bound is not checked here so users can delete digits and retype
//! a value. Range validation happens when the field loses focus.

use crate::constants::{is_accepted_char, parse_or_invalid, INVALID_VALUE};

/// Outcome of filtering one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered {
    /// Insert this text (possibly with rejected characters removed)
    Accept(String),
    /// Insert nothing
    Reject,
}

impl Filtered {
    /// Text to put in place of the edited range
    pub fn replacement(&self) -> &str {
        match self {
            Filtered::Accept(text) => text,
            Filtered::Reject => "",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Filtered::Reject)
    }
}

/// Upper-bound filter for numeric text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRangeFilter {
    /// Inclusive upper bound
    pub end: f64,
    /// Tolerance used to detect unparsable text
    pub epsilon: f64,
}

impl NumberRangeFilter {
    pub fn new(end: f64, epsilon: f64) -> Self {
        Self { end, epsilon }
    }

    /// Filter the replacement of `dest[start..end]` by `inserted`.
    ///
    /// `start` and `end` are byte offsets into `dest`; they are clamped to it
    /// and moved back onto char boundaries.
    pub fn filter(&self, inserted: &str, dest: &str, start: usize, end: usize) -> Filtered {
        let accepted: String = inserted.chars().filter(|&c| is_accepted_char(c)).collect();

        let end = floor_char_boundary(dest, end);
        let start = floor_char_boundary(dest, start.min(end));
        let result = compose(dest, start, end, &accepted);

        if result.is_empty() {
            return Filtered::Accept(accepted);
        }

        let value = parse_or_invalid(&result);
        if value > self.end || (value - INVALID_VALUE).abs() < self.epsilon {
            log::debug!(
                "NumberRangeFilter: rejected '{}' (upper bound {})",
                result,
                self.end
            );
            Filtered::Reject
        } else {
            Filtered::Accept(accepted)
        }
    }
}

/// Largest char boundary of `text` at or below `index`
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Text that results from replacing `dest[start..end]` with `inserted`
pub fn compose(dest: &str, start: usize, end: usize, inserted: &str) -> String {
    let mut result = String::with_capacity(dest.len() - (end - start) + inserted.len());
    result.push_str(&dest[..start]);
    result.push_str(inserted);
    result.push_str(&dest[end..]);
    result
}
