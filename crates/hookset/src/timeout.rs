use std::cell::RefCell;

use hookset_core::{Composer, Dispose, Duration, TimerSlot, on_unmount};

type Callback = Box<dyn FnMut()>;

/// Calls `callback` once, `delay` after the delay was last set.
///
/// `None` pauses: nothing is scheduled, and a pending call is cancelled. A new
/// `delay` cancels the pending call and restarts the full window. The call
/// always goes to the callback passed on the most recent pass.
///
/// A panicking callback unwinds to whoever advanced the timer queue.
pub fn use_timeout(cx: &mut Composer, callback: impl FnMut() + 'static, delay: Option<Duration>) {
    let latest = cx.remember(|| RefCell::new(None::<Callback>));
    *latest.borrow_mut() = Some(Box::new(callback));

    let timers = cx.timers().clone();
    let timer = cx.remember(|| TimerSlot::new(timers));

    cx.disposable_effect(delay, move || {
        let Some(delay) = delay else {
            timer.cancel();
            return Dispose::noop();
        };
        timer.schedule(delay, move || {
            if let Some(callback) = latest.borrow_mut().as_mut() {
                callback();
            }
        });
        on_unmount(move || {
            timer.cancel();
        })
    });
}
