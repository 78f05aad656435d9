//! Input events delivered to the picker

use crate::timer::RepeatToken;

/// The two actionable elements next to the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Increment,
    Decrement,
}

impl Button {
    /// The other button
    pub fn opposite(self) -> Self {
        match self {
            Button::Increment => Button::Decrement,
            Button::Decrement => Button::Increment,
        }
    }

    /// Sign applied to the step when this button drives a change
    pub fn direction(self) -> f64 {
        match self {
            Button::Increment => 1.0,
            Button::Decrement => -1.0,
        }
    }
}

/// Events the picker responds to.
#[derive(Debug, Clone)]
pub enum Event {
    /// A button was tapped.
    Tap(Button),
    /// A button started a long press.
    LongPress(Button),
    /// A long-pressed button was released.
    Release(Button),
    /// The text field gained focus.
    FocusGained,
    /// The text field lost focus.
    FocusLost,
    /// Characters typed at the caret.
    TextInput { text: String },
    /// Raw replacement of the byte range `start..end` of the field text.
    Edit {
        start: usize,
        end: usize,
        text: String,
    },
    /// Keyboard key pressed while the text field has focus.
    KeyPress { key: KeyCode, modifiers: Modifiers },
    /// A repeat task posted to the scheduler came due.
    RepeatTick(RepeatToken),
}

/// Keyboard keys the text field handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Escape,
    A,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

impl Event {
    /// Shorthand for a key press without modifiers
    pub fn key(key: KeyCode) -> Self {
        Event::KeyPress {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Shorthand for typed text
    pub fn text(text: impl Into<String>) -> Self {
        Event::TextInput { text: text.into() }
    }
}
