//! Widget trait and related types

use crate::event::Event;
use crate::timer::Scheduler;

/// Whether a widget consumed an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The event changed the widget or was otherwise handled
    Captured,
    /// The event was not for this widget, or it is disabled
    Ignored,
}

impl EventStatus {
    pub fn is_captured(self) -> bool {
        self == EventStatus::Captured
    }
}

impl From<bool> for EventStatus {
    fn from(captured: bool) -> Self {
        if captured {
            EventStatus::Captured
        } else {
            EventStatus::Ignored
        }
    }
}

/// The core widget trait implemented by interactive elements.
///
/// Layout and drawing belong to the host framework; a widget only reacts to
/// events and may post delayed work to the host's scheduler.
pub trait Widget {
    /// Handle an event
    fn on_event(&mut self, event: &Event, scheduler: &mut dyn Scheduler) -> EventStatus;

    /// Whether the widget currently accepts input
    fn is_enabled(&self) -> bool {
        true
    }

    /// Enable or disable the widget and its sub-elements
    fn set_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }
}
