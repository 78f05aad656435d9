//! Wall-clock driver for picker repeat ticks
//!
//! [`TimerQueue`] only knows virtual time. The driver anchors it to a
//! [`web_time::Instant`] so that repeat ticks come due in real time, and
//! delivers due ticks back to the picker.

use std::time::Duration;

use numpick_ui::{Button, Event, EventStatus, NumberPicker, TimerQueue, Widget};
use web_time::Instant;

/// Pairs a timer queue with a real clock.
#[derive(Debug)]
pub struct RealTimeDriver {
    queue: TimerQueue,
    origin: Instant,
}

impl Default for RealTimeDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl RealTimeDriver {
    pub fn new() -> Self {
        Self {
            queue: TimerQueue::new(),
            origin: Instant::now(),
        }
    }

    pub fn queue(&self) -> &TimerQueue {
        &self.queue
    }

    /// Bring the queue's clock up to wall-clock time
    fn sync(&mut self) {
        self.queue.advance_to(self.origin.elapsed());
    }

    /// Deliver an event to the picker
    pub fn send(&mut self, picker: &mut NumberPicker, event: Event) -> EventStatus {
        self.sync();
        picker.on_event(&event, &mut self.queue)
    }

    /// Deliver every repeat tick that is due. Returns how many were delivered.
    pub fn pump(&mut self, picker: &mut NumberPicker) -> usize {
        self.sync();
        let mut delivered = 0;
        while let Some(token) = self.queue.pop_due() {
            picker.on_event(&Event::RepeatTick(token), &mut self.queue);
            delivered += 1;
        }
        delivered
    }

    /// Time until the next queued tick, zero if one is already due
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.sync();
        let now = self.queue.now();
        self.queue
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Long-press `button` for `duration` of wall-clock time, then release it.
    ///
    /// Returns the number of ticks delivered while the button was held.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn hold(&mut self, picker: &mut NumberPicker, button: Button, duration: Duration) -> usize {
        let release_at = Instant::now() + duration;
        self.send(picker, Event::LongPress(button));

        let mut delivered = self.pump(picker);
        loop {
            let now = Instant::now();
            if now >= release_at {
                break;
            }
            let wait = self
                .time_until_next()
                .map_or(release_at - now, |next| next.min(release_at - now));
            std::thread::sleep(wait);
            delivered += self.pump(picker);
        }

        self.send(picker, Event::Release(button));
        log::debug!("Released {:?} after {} ticks", button, delivered);
        delivered
    }

    /// Wait for queued ticks of released buttons to run out.
    ///
    /// Returns immediately while a repeat is still active, since its ticks
    /// would never run out.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn settle(&mut self, picker: &mut NumberPicker) {
        while !picker.is_repeating(Button::Increment) && !picker.is_repeating(Button::Decrement) {
            match self.time_until_next() {
                Some(wait) => {
                    std::thread::sleep(wait);
                    self.pump(picker);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pump_delivers_immediate_tick() {
        let mut picker = NumberPicker::new();
        picker.set_speed(10_000);
        let mut driver = RealTimeDriver::new();

        driver.send(&mut picker, Event::LongPress(Button::Increment));
        assert_eq!(driver.pump(&mut picker), 1);
        assert_eq!(picker.get_current(), 2);

        // Next tick is far away
        assert_eq!(driver.pump(&mut picker), 0);
        assert!(driver.time_until_next().unwrap() > Duration::from_secs(5));

        driver.send(&mut picker, Event::Release(Button::Increment));
        assert!(!picker.is_repeating(Button::Increment));
    }

    #[test]
    fn test_tap_through_driver() {
        let mut picker = NumberPicker::new();
        let mut driver = RealTimeDriver::new();
        let status = driver.send(&mut picker, Event::Tap(Button::Decrement));
        assert!(status.is_captured());
        assert_eq!(picker.get_current(), 10);
        assert!(driver.queue().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_hold_and_settle() {
        let mut picker = NumberPicker::new();
        picker.set_speed(200);
        let mut driver = RealTimeDriver::new();

        let ticks = driver.hold(&mut picker, Button::Increment, Duration::ZERO);
        assert_eq!(ticks, 1);
        assert_eq!(picker.get_current(), 2);

        driver.settle(&mut picker);
        assert!(driver.queue().is_empty());
        assert_eq!(picker.get_current(), 2);
    }
}
