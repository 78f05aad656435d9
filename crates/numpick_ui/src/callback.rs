//! Capabilities injected into the picker by the host application
//!
//! The picker talks to the outside world through two narrow traits:
//!
//! - [`ChangeListener`] observes every committed value change.
//! - [`Formatter`] turns the current value into display text.
//!
//! Closures implement both traits, so most hosts never name them:
//!
//! ```
//! use numpick_ui::NumberPicker;
//!
//! let mut picker = NumberPicker::new();
//! picker.set_on_change_listener(|_: &NumberPicker, old: f64, new: f64| {
//!     println!("{old} -> {new}");
//! });
//! picker.set_formatter(|value: f64| format!("{value:.0} items"));
//! ```

use std::fmt;

use crate::constants::format_number;
use crate::widgets::NumberPicker;

// =============================================================================
// Change Listener
// =============================================================================

/// Observer notified synchronously on every committed change.
///
/// The picker passes itself so the listener can read the freshly committed
/// state. Listener calls happen before the display text is refreshed.
pub trait ChangeListener {
    /// Called with the value before and after the change
    fn on_changed(&mut self, picker: &NumberPicker, old_value: f64, new_value: f64);
}

impl<F> ChangeListener for F
where
    F: FnMut(&NumberPicker, f64, f64),
{
    fn on_changed(&mut self, picker: &NumberPicker, old_value: f64, new_value: f64) {
        self(picker, old_value, new_value)
    }
}

/// Optional listener slot owned by the picker.
#[derive(Default)]
pub struct ListenerSlot {
    listener: Option<Box<dyn ChangeListener>>,
}

impl ListenerSlot {
    /// Create a slot holding a listener
    pub fn new(listener: impl ChangeListener + 'static) -> Self {
        Self {
            listener: Some(Box::new(listener)),
        }
    }

    /// Create an empty slot
    pub fn none() -> Self {
        Self { listener: None }
    }

    /// Remove the listener so it can be called while the picker is borrowed
    pub(crate) fn take(&mut self) -> Option<Box<dyn ChangeListener>> {
        self.listener.take()
    }

    /// Put a listener back after a call
    pub(crate) fn restore(&mut self, listener: Box<dyn ChangeListener>) {
        self.listener = Some(listener);
    }

    /// Check if a listener is set
    pub fn is_some(&self) -> bool {
        self.listener.is_some()
    }

    /// Check if no listener is set
    pub fn is_none(&self) -> bool {
        self.listener.is_none()
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Turns a value into the text shown in the picker's field.
///
/// Implementations are pure: the same value and precision always produce the
/// same text and no state is retained between calls.
pub trait Formatter {
    /// Format `value`, given the picker's current decimal precision
    fn format(&self, value: f64, precision: u32) -> String;
}

/// Plain closures format the value themselves and ignore the precision.
impl<F> Formatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64, _precision: u32) -> String {
        self(value)
    }
}

/// Default formatter: fixed number of decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalFormatter;

impl Formatter for DecimalFormatter {
    fn format(&self, value: f64, precision: u32) -> String {
        format_number(value, precision)
    }
}

/// Formatter slot owned by the picker. Always holds a formatter.
pub struct FormatterSlot {
    formatter: Box<dyn Formatter>,
    custom: bool,
}

impl FormatterSlot {
    /// Create a slot holding a host-provided formatter
    pub fn new(formatter: impl Formatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
            custom: true,
        }
    }

    /// Format a value through the held formatter
    pub fn format(&self, value: f64, precision: u32) -> String {
        self.formatter.format(value, precision)
    }

    /// Whether a host-provided formatter replaced the default
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}

impl Default for FormatterSlot {
    fn default() -> Self {
        Self {
            formatter: Box::new(DecimalFormatter),
            custom: false,
        }
    }
}

impl fmt::Debug for FormatterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterSlot")
            .field("custom", &self.custom)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_decimal_formatter() {
        let formatter = DecimalFormatter;
        assert_eq!(formatter.format(3.0, 0), "3");
        assert_eq!(formatter.format(3.0, 2), "3.00");
        assert_eq!(formatter.format(0.125, 2), "0.12");
    }

    #[test]
    fn test_closure_formatter_ignores_precision() {
        let slot = FormatterSlot::new(|value: f64| format!("#{value}"));
        assert!(slot.is_custom());
        assert_eq!(slot.format(4.0, 3), "#4");
    }

    #[test]
    fn test_default_formatter_slot() {
        let slot = FormatterSlot::default();
        assert!(!slot.is_custom());
        assert_eq!(slot.format(1.5, 1), "1.5");
    }

    #[test]
    fn test_listener_slot_take_restore() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut slot = ListenerSlot::new(move |_: &NumberPicker, old: f64, new: f64| {
            sink.borrow_mut().push((old, new));
        });
        assert!(slot.is_some());

        let mut listener = slot.take().unwrap();
        assert!(slot.is_none());
        let picker = NumberPicker::new();
        listener.on_changed(&picker, 1.0, 2.0);
        slot.restore(listener);

        assert!(slot.is_some());
        assert_eq!(*calls.borrow(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_slot_debug() {
        assert_eq!(
            format!("{:?}", ListenerSlot::none()),
            "ListenerSlot { set: false }"
        );
    }
}
