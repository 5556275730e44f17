//! # Timers
//!
//! `TimerQueue` is the host's one-shot timer scheduler. Time is a
//! `Duration` offset from queue creation; it only moves when the host calls
//! [`TimerQueue::advance`], [`TimerQueue::advance_to`] or
//! [`TimerQueue::poll`]. Scheduling never runs a callback synchronously, even
//! for a zero delay.
//!
//! ```rust
//! use hookset_core::*;
//! use std::{cell::Cell, rc::Rc, time::Duration};
//!
//! let timers = TimerQueue::new();
//! let fired = Rc::new(Cell::new(false));
//! let f = fired.clone();
//! timers.schedule(Duration::from_millis(10), move || f.set(true));
//!
//! timers.advance(Duration::from_millis(9));
//! assert!(!fired.get());
//! timers.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```
//!
//! Primitives never hold a raw [`TimerHandle`] in a closure; they own a
//! [`TimerSlot`], which cancels its previous handle before every schedule.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::clock::Clock;

new_key_type! {
    /// Handle to a pending one-shot timer. Stale after the timer fires or is
    /// cancelled.
    pub struct TimerHandle;
}

pub type Timers = Rc<TimerQueue>;

struct Entry {
    deadline: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

struct QueueInner {
    now: Duration,
    next_seq: u64,
    entries: SlotMap<TimerHandle, Entry>,
}

pub struct TimerQueue {
    inner: RefCell<QueueInner>,
    clock: Option<(Box<dyn Clock>, Instant)>,
}

impl TimerQueue {
    /// Virtual-time queue; time moves only through `advance*`.
    pub fn new() -> Timers {
        Rc::new(Self::build(None))
    }

    /// Queue whose `poll()` follows `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Timers {
        let origin = clock.now();
        Rc::new(Self::build(Some((clock, origin))))
    }

    fn build(clock: Option<(Box<dyn Clock>, Instant)>) -> Self {
        Self {
            inner: RefCell::new(QueueInner {
                now: Duration::ZERO,
                next_seq: 0,
                entries: SlotMap::with_key(),
            }),
            clock,
        }
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.now.saturating_add(delay);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let handle = inner.entries.insert(Entry {
            deadline,
            seq,
            callback: Box::new(callback),
        });
        log::trace!("timer {handle:?}: scheduled for {deadline:?}");
        handle
    }

    /// Returns `false` if the handle already fired or was cancelled.
    pub fn cancel(&self, handle: TimerHandle) -> bool {
        let removed = self.inner.borrow_mut().entries.remove(handle).is_some();
        if removed {
            log::trace!("timer {handle:?}: cancelled");
        }
        removed
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.inner.borrow().entries.contains_key(handle)
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Moves time forward by `by`, firing due timers in deadline order.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        while let Some((handle, callback)) = self.pop_due(target) {
            log::trace!("timer {handle:?}: firing");
            // No borrow is held here; callbacks may schedule or cancel.
            callback();
            fired += 1;
        }
        let mut inner = self.inner.borrow_mut();
        if target > inner.now {
            inner.now = target;
        }
        fired
    }

    /// Advances to the attached clock's current time. Without a clock this
    /// only flushes timers already due.
    pub fn poll(&self) -> usize {
        let target = match &self.clock {
            Some((clock, origin)) => clock.now().saturating_duration_since(*origin),
            None => self.now(),
        };
        self.advance_to(target)
    }

    fn pop_due(&self, target: Duration) -> Option<(TimerHandle, Box<dyn FnOnce()>)> {
        let mut inner = self.inner.borrow_mut();
        let handle = inner
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= target)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(h, _)| h)?;
        let entry = inner.entries.remove(handle)?;
        if entry.deadline > inner.now {
            inner.now = entry.deadline;
        }
        Some((handle, entry.callback))
    }
}

/// Owned handle field for one timer-owning primitive instance.
///
/// At most one handle is live per slot: `schedule` cancels the previous one
/// before asking the queue for a new one.
pub struct TimerSlot {
    timers: Timers,
    handle: Cell<Option<TimerHandle>>,
}

impl TimerSlot {
    pub fn new(timers: Timers) -> Self {
        Self {
            timers,
            handle: Cell::new(None),
        }
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.timers.schedule(delay, callback);
        self.handle.set(Some(handle));
    }

    pub fn cancel(&self) -> bool {
        match self.handle.take() {
            Some(handle) => self.timers.cancel(handle),
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .get()
            .is_some_and(|handle| self.timers.is_pending(handle))
    }
}
