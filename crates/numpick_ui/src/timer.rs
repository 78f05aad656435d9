//! Delay scheduling for long-press auto-repeat
//!
//! The picker never sleeps or spawns anything. It posts [`RepeatToken`]s to a
//! [`Scheduler`] owned by the host, and the host hands each token back as
//! [`Event::RepeatTick`](crate::Event::RepeatTick) once its delay has passed.
//! Everything runs on the host's event-loop thread.
//!
//! # Cancellation
//!
//! A long press owns one [`RepeatHandle`]. Cancelling the handle does not
//! remove a tick that is already queued: the queued tick is still delivered,
//! observes the cancellation and stops without changing the value or posting
//! another tick. A release is therefore honoured at the next tick boundary,
//! at most one repeat interval later.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::event::Button;

/// Accepts a task and runs it once after a delay on the same thread.
pub trait Scheduler {
    /// Post `token` to be delivered after `delay`. A zero delay means "post now".
    fn post(&mut self, token: RepeatToken, delay: Duration);
}

/// Cancellable handle shared by every tick of one long press.
#[derive(Debug, Clone, Default)]
pub struct RepeatHandle {
    cancelled: Rc<Cell<bool>>,
}

impl RepeatHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the repeat stops at its next tick
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Whether two handles belong to the same long press
    pub fn same_as(&self, other: &RepeatHandle) -> bool {
        Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Payload of a scheduled repeat tick.
#[derive(Debug, Clone)]
pub struct RepeatToken {
    /// Which button is being held
    pub direction: Button,
    /// Handle of the long press this tick belongs to
    pub handle: RepeatHandle,
}

impl RepeatToken {
    pub fn new(direction: Button, handle: RepeatHandle) -> Self {
        Self { direction, handle }
    }
}

/// A token waiting in the [`TimerQueue`]
#[derive(Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    token: RepeatToken,
}

/// Virtual-time scheduler.
///
/// Time only moves when [`advance`](Self::advance) is called, which makes
/// repeat behaviour reproducible in tests. Hosts with a real clock advance it
/// by the elapsed wall-clock time before draining due tokens.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward
    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Move the clock to an absolute time. Never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Remove and return the earliest token whose deadline has passed.
    ///
    /// Tokens with equal deadlines come out in the order they were posted.
    pub fn pop_due(&mut self) -> Option<RepeatToken> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= self.now)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index).token)
    }

    /// Deadline of the earliest queued token
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn post(&mut self, token: RepeatToken, delay: Duration) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            token,
        });
    }
}
