//! numpick_ui - A numeric picker widget core
//!
//! A text field with increment/decrement buttons, wrap-around range stepping,
//! long-press auto-repeat and fixed-precision formatting. Layout and drawing
//! are left to the host framework: the picker consumes [`Event`]s and posts
//! repeat ticks to a host-owned [`Scheduler`].
//!
//! ```
//! use numpick_ui::prelude::*;
//!
//! let mut picker = NumberPicker::new();
//! let mut queue = TimerQueue::new();
//!
//! picker.on_event(&Event::Tap(Button::Increment), &mut queue);
//! assert_eq!(picker.get_current(), 2);
//! ```

mod callback;
pub mod constants;
mod event;
mod filter;
mod state;
mod timer;
mod widget;
mod widgets;

pub use callback::{ChangeListener, DecimalFormatter, Formatter, FormatterSlot, ListenerSlot};
pub use event::{Button, Event, KeyCode, Modifiers};
pub use filter::{Filtered, NumberRangeFilter};
pub use state::{PickerState, TextFieldState};
pub use timer::{RepeatHandle, RepeatToken, Scheduler, TimerQueue};
pub use widget::{EventStatus, Widget};
pub use widgets::{NumberPicker, SubElements};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::{ChangeListener, Formatter};
    pub use crate::event::{Button, Event, KeyCode, Modifiers};
    pub use crate::timer::{Scheduler, TimerQueue};
    pub use crate::widget::{EventStatus, Widget};
    pub use crate::widgets::NumberPicker;
}
