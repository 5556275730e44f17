use std::cell::Cell;
use std::rc::Rc;

use hookset_core::{Composer, Signal};

/// Handle returned by [`use_counter`].
#[derive(Clone)]
pub struct Counter {
    count: Signal<i64>,
    initial: Rc<Cell<i64>>,
}

impl Counter {
    pub fn count(&self) -> i64 {
        self.count.get()
    }

    pub fn increment(&self) {
        self.increment_by(1);
    }

    /// Saturates at `i64::MAX`.
    pub fn increment_by(&self, delta: i64) {
        self.count.update(|c| *c = c.saturating_add(delta));
    }

    pub fn decrement(&self) {
        self.decrement_by(1);
    }

    /// Saturates at `i64::MIN`.
    pub fn decrement_by(&self, delta: i64) {
        self.count.update(|c| *c = c.saturating_sub(delta));
    }

    pub fn set(&self, value: i64) {
        self.count.set(value);
    }

    /// `f` runs with no borrow held, so it may read the counter.
    pub fn update(&self, f: impl FnOnce(i64) -> i64) {
        self.count.set(f(self.count()));
    }

    /// Back to `initial` as passed on the latest pass.
    pub fn reset(&self) {
        self.count.set(self.initial.get());
    }
}

pub fn use_counter(cx: &mut Composer, initial: i64) -> Counter {
    let count = cx.remember_state(|| initial);
    let latest = cx.remember(|| Cell::new(initial));
    latest.set(initial);
    Counter {
        count,
        initial: latest,
    }
}
