//! Number picker widget: a text field flanked by increment/decrement buttons

use std::time::Duration;

use crate::callback::{ChangeListener, Formatter, FormatterSlot, ListenerSlot};
use crate::event::{Button, Event, KeyCode, Modifiers};
use crate::filter::{compose, floor_char_boundary};
use crate::state::{PickerState, TextFieldState};
use crate::timer::{RepeatHandle, RepeatToken, Scheduler};
use crate::widget::{EventStatus, Widget};
use crate::widgets::text_core;

/// Enabled flags of the picker's sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubElements {
    pub text_field: bool,
    pub increment: bool,
    pub decrement: bool,
}

impl SubElements {
    fn all(enabled: bool) -> Self {
        Self {
            text_field: enabled,
            increment: enabled,
            decrement: enabled,
        }
    }

    /// Whether a button accepts input
    pub fn button(&self, button: Button) -> bool {
        match button {
            Button::Increment => self.increment,
            Button::Decrement => self.decrement,
        }
    }
}

/// A bounded numeric input with wrap-around stepping and long-press repeat.
///
/// Reads go through the displayed text: [`get_current`](Self::get_current)
/// and [`get_float_current`](Self::get_float_current) parse what the user
/// sees, falling back to the lower bound when it does not parse.
#[derive(Debug)]
pub struct NumberPicker {
    state: PickerState,
    field: TextFieldState,
    listener: ListenerSlot,
    formatter: FormatterSlot,
    enabled: bool,
    elements: SubElements,
    increment_repeat: Option<RepeatHandle>,
    decrement_repeat: Option<RepeatHandle>,
}

impl Default for NumberPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberPicker {
    /// Create a picker over `[1, 10]` showing its start value
    pub fn new() -> Self {
        let mut picker = Self {
            state: PickerState::new(),
            field: TextFieldState::default(),
            listener: ListenerSlot::none(),
            formatter: FormatterSlot::default(),
            enabled: true,
            elements: SubElements::all(true),
            increment_repeat: None,
            decrement_repeat: None,
        };
        picker.update_view();
        picker
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set integer bounds; an `end` of `-1` means no maximum.
    /// The value resets to `start`.
    pub fn set_range(&mut self, start: i64, end: i64) {
        self.state.set_range(start, end);
        self.update_view();
    }

    /// Set real bounds; an `end` within epsilon of `-1` means no maximum.
    /// The value resets to `start`.
    pub fn set_float_range(&mut self, start: f64, end: f64) {
        self.state.set_float_range(start, end);
        self.update_view();
    }

    /// Show `value` without notifying the listener
    pub fn set_current(&mut self, value: i64) {
        self.set_float_current(value as f64);
    }

    /// Show `value` without notifying the listener
    pub fn set_float_current(&mut self, value: f64) {
        self.state.current = value;
        self.update_view();
    }

    pub fn set_precision(&mut self, places: i32) {
        self.state.set_precision(places);
        self.update_view();
    }

    pub fn set_step(&mut self, step: f64) {
        self.state.set_step(step);
    }

    /// Interval between long-press repeat ticks, in milliseconds
    pub fn set_speed(&mut self, millis: u64) {
        self.state.set_speed(Duration::from_millis(millis));
    }

    pub fn set_on_change_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = ListenerSlot::new(listener);
    }

    pub fn clear_on_change_listener(&mut self) {
        self.listener = ListenerSlot::none();
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = FormatterSlot::new(formatter);
        self.update_view();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Integer value of the displayed text, or `floor(start)` if it is not an integer
    pub fn get_current(&self) -> i64 {
        self.field
            .text
            .parse()
            .unwrap_or(self.state.start.floor() as i64)
    }

    /// Real value of the displayed text, or `start` if it does not parse
    pub fn get_float_current(&self) -> f64 {
        self.field.text.parse().unwrap_or(self.state.start)
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn field(&self) -> &TextFieldState {
        &self.field
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.field.text
    }

    pub fn elements(&self) -> SubElements {
        self.elements
    }

    /// Whether a long press in `direction` is still repeating
    pub fn is_repeating(&self, direction: Button) -> bool {
        self.repeat_slot(direction)
            .as_ref()
            .is_some_and(|handle| !handle.is_cancelled())
    }

    // =========================================================================
    // Value Changes
    // =========================================================================

    /// Commit a new value, wrapping past either bound to the opposite one.
    ///
    /// Notifies the listener with `(previous, current)` and refreshes the text.
    pub fn change_current(&mut self, value: f64) {
        let value = self.state.wrap(value);
        let (old, new) = self.state.commit(value);
        log::debug!("NumberPicker: changed {} -> {}", old, new);
        self.notify_change(old, new);
        self.update_view();
    }

    fn step_once(&mut self, direction: Button) {
        self.change_current(self.state.current + direction.direction() * self.state.step);
    }

    fn notify_change(&mut self, old: f64, new: f64) {
        if let Some(mut listener) = self.listener.take() {
            listener.on_changed(self, old, new);
            self.listener.restore(listener);
        }
    }

    /// Show the formatted current value with the caret at the end
    fn update_view(&mut self) {
        let text = self.formatter.format(self.state.current, self.state.precision);
        self.field.set_text(text);
    }

    /// Commit typed text if it is a new in-range value, then redisplay.
    ///
    /// Empty, unparsable and out-of-range text is replaced by the formatted
    /// current value without notifying anyone.
    fn validate_input(&mut self) {
        if self.field.text.is_empty() {
            self.update_view();
            return;
        }

        match self.field.text.parse::<f64>() {
            Ok(value) if self.state.contains(value) && self.state.differs(value) => {
                let (old, new) = self.state.commit(value);
                log::debug!("NumberPicker: validated input {} -> {}", old, new);
                self.notify_change(old, new);
            }
            _ => {
                log::debug!("NumberPicker: reverting input '{}'", self.field.text);
            }
        }
        self.update_view();
    }

    /// Replace `start..end` of the text, letting the filter decide what is inserted
    fn apply_edit(&mut self, start: usize, end: usize, inserted: &str) {
        let text = &self.field.text;
        let end = floor_char_boundary(text, end);
        let start = floor_char_boundary(text, start.min(end));

        let filtered = self.state.filter().filter(inserted, text, start, end);
        let replacement = filtered.replacement();
        self.field.text = compose(text, start, end, replacement);
        self.field.cursor = start + replacement.len();
        self.field.selection = None;
        log::debug!("NumberPicker: text edit, value = '{}'", self.field.text);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    fn gain_focus(&mut self) {
        if !self.field.is_focused {
            self.field.focus();
        }
    }

    fn lose_focus(&mut self) {
        if self.field.is_focused {
            self.field.blur();
            log::debug!("NumberPicker: focus lost, validating '{}'", self.field.text);
            self.validate_input();
        }
    }

    // =========================================================================
    // Auto-repeat
    // =========================================================================

    fn repeat_slot(&self, direction: Button) -> &Option<RepeatHandle> {
        match direction {
            Button::Increment => &self.increment_repeat,
            Button::Decrement => &self.decrement_repeat,
        }
    }

    fn repeat_slot_mut(&mut self, direction: Button) -> &mut Option<RepeatHandle> {
        match direction {
            Button::Increment => &mut self.increment_repeat,
            Button::Decrement => &mut self.decrement_repeat,
        }
    }

    /// Stop a long-press repeat. Takes effect at the next tick.
    pub fn cancel_repeat(&mut self, direction: Button) -> bool {
        match self.repeat_slot_mut(direction).take() {
            Some(handle) => {
                handle.cancel();
                log::debug!("NumberPicker: {:?} repeat cancelled", direction);
                true
            }
            None => false,
        }
    }

    /// Stop an increment long press
    pub fn cancel_increment(&mut self) {
        self.cancel_repeat(Button::Increment);
    }

    /// Stop a decrement long press
    pub fn cancel_decrement(&mut self) {
        self.cancel_repeat(Button::Decrement);
    }

    fn start_repeat(&mut self, direction: Button, scheduler: &mut dyn Scheduler) {
        self.cancel_repeat(direction.opposite());
        self.cancel_repeat(direction);

        let handle = RepeatHandle::new();
        *self.repeat_slot_mut(direction) = Some(handle.clone());
        scheduler.post(RepeatToken::new(direction, handle), Duration::ZERO);
        log::debug!(
            "NumberPicker: {:?} repeat started every {:?}",
            direction,
            self.state.speed
        );
    }

    fn on_repeat_tick(
        &mut self,
        token: &RepeatToken,
        scheduler: &mut dyn Scheduler,
    ) -> EventStatus {
        let active = self
            .repeat_slot(token.direction)
            .as_ref()
            .is_some_and(|handle| handle.same_as(&token.handle));

        if !active || token.handle.is_cancelled() {
            log::trace!("NumberPicker: {:?} repeat stopped", token.direction);
            return EventStatus::Ignored;
        }

        self.step_once(token.direction);
        log::trace!("NumberPicker: {:?} repeat tick", token.direction);
        scheduler.post(token.clone(), self.state.speed);
        EventStatus::Captured
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    fn on_tap(&mut self, button: Button) {
        self.validate_input();
        self.gain_focus();
        self.step_once(button);
    }

    fn on_key(&mut self, key: KeyCode, modifiers: Modifiers) -> EventStatus {
        let field = &self.field;
        match key {
            KeyCode::Backspace => {
                if let Some((start, end)) =
                    text_core::backspace_range(&field.text, field.cursor, field.selection)
                {
                    self.apply_edit(start, end, "");
                }
            }
            KeyCode::Delete => {
                if let Some((start, end)) =
                    text_core::delete_range(&field.text, field.cursor, field.selection)
                {
                    self.apply_edit(start, end, "");
                }
            }
            KeyCode::Left => {
                let (cursor, selection) = text_core::move_left(
                    &field.text,
                    field.cursor,
                    field.selection,
                    modifiers.shift,
                );
                self.field.cursor = cursor;
                self.field.selection = selection;
            }
            KeyCode::Right => {
                let (cursor, selection) = text_core::move_right(
                    &field.text,
                    field.cursor,
                    field.selection,
                    modifiers.shift,
                );
                self.field.cursor = cursor;
                self.field.selection = selection;
            }
            KeyCode::Home => {
                let (cursor, selection) =
                    text_core::move_to(field.cursor, field.selection, 0, modifiers.shift);
                self.field.cursor = cursor;
                self.field.selection = selection;
            }
            KeyCode::End => {
                let (cursor, selection) = text_core::move_to(
                    field.cursor,
                    field.selection,
                    field.text.len(),
                    modifiers.shift,
                );
                self.field.cursor = cursor;
                self.field.selection = selection;
            }
            KeyCode::A if modifiers.ctrl => {
                let len = field.text.len();
                self.field.selection = Some((0, len));
                self.field.cursor = len;
            }
            KeyCode::Up if self.elements.increment => self.on_tap(Button::Increment),
            KeyCode::Down if self.elements.decrement => self.on_tap(Button::Decrement),
            KeyCode::Enter | KeyCode::Escape => self.lose_focus(),
            _ => return EventStatus::Ignored,
        }
        EventStatus::Captured
    }
}

impl Widget for NumberPicker {
    fn on_event(&mut self, event: &Event, scheduler: &mut dyn Scheduler) -> EventStatus {
        let typing = self.elements.text_field && self.field.is_focused;

        match event {
            Event::Tap(button) if self.elements.button(*button) => {
                log::debug!("NumberPicker: {:?} tap", button);
                self.on_tap(*button);
                EventStatus::Captured
            }

            Event::LongPress(button) if self.elements.button(*button) => {
                self.lose_focus();
                self.start_repeat(*button, scheduler);
                EventStatus::Captured
            }

            Event::Release(button) => self.cancel_repeat(*button).into(),

            Event::FocusGained if self.elements.text_field => {
                self.gain_focus();
                EventStatus::Captured
            }

            Event::FocusLost if self.field.is_focused => {
                self.lose_focus();
                EventStatus::Captured
            }

            Event::TextInput { text } if typing => {
                let (start, end) =
                    text_core::insertion_range(self.field.cursor, self.field.selection);
                self.apply_edit(start, end, text);
                EventStatus::Captured
            }

            Event::Edit { start, end, text } if typing => {
                self.apply_edit(*start, *end, text);
                EventStatus::Captured
            }

            Event::KeyPress { key, modifiers } if typing => self.on_key(*key, *modifiers),

            Event::RepeatTick(token) => self.on_repeat_tick(token, scheduler),

            _ => EventStatus::Ignored,
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Propagates to the text field and both buttons. Disabling stops any
    /// running long-press repeat.
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.elements = SubElements::all(enabled);
        if !enabled {
            self.cancel_increment();
            self.cancel_decrement();
            self.lose_focus();
        }
    }
}
