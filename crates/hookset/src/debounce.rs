use hookset_core::{Composer, Duration, TimerSlot, on_unmount};

/// Returns `value` once it has stayed unchanged for `delay`.
///
/// Any change of `value` or `delay` cancels the pending timer and starts a
/// new window. The first pass returns `value` as-is. Updates never apply
/// synchronously, not even with a zero delay.
pub fn use_debounce<T: Clone + PartialEq + 'static>(
    cx: &mut Composer,
    value: T,
    delay: Duration,
) -> T {
    let debounced = cx.remember_state(|| value.clone());
    let timers = cx.timers().clone();
    let timer = cx.remember(|| TimerSlot::new(timers));

    let out = debounced.clone();
    let next = value.clone();
    cx.disposable_effect((value, delay), move || {
        timer.schedule(delay, move || out.set(next));
        on_unmount(move || {
            timer.cancel();
        })
    });

    debounced.get()
}
