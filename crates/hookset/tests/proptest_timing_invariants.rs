//! Property-based invariants for the timer-owning and derived-state hooks.
//!
//! 1. Debounce output only ever takes values that stayed stable for a full
//!    window, and always ends on the last input.
//! 2. Debounce never holds more than one pending timer.
//! 3. Timeout fires at most once per scheduled delay and never after unmount.
//! 4. Set reset restores the initial snapshot regardless of history.
//! 5. Input-control reset is idempotent and ignores later initial arguments.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use hookset::*;
use hookset_core::{Duration, RenderHook};
use proptest::prelude::*;

const DELAY_MS: u64 = 100;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[derive(Debug, Clone)]
enum SetOp {
    Add(u8),
    Remove(u8),
    Toggle(u8),
    Clear,
}

fn set_op() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        (0u8..8).prop_map(SetOp::Add),
        (0u8..8).prop_map(SetOp::Remove),
        (0u8..8).prop_map(SetOp::Toggle),
        Just(SetOp::Clear),
    ]
}

proptest! {
    #[test]
    fn debounce_only_surfaces_stable_values(
        steps in prop::collection::vec((0u32..4, 0u64..2 * DELAY_MS), 1..24)
    ) {
        let mut h = RenderHook::new(0u32, |cx, v: &u32| use_debounce(cx, *v, ms(DELAY_MS)));

        // (value, time it was set)
        let mut last = (0u32, 0u64);
        let mut now = 0u64;
        let mut stable_values = HashSet::from([0u32]);

        for (value, gap) in steps {
            if now - last.1 >= DELAY_MS {
                stable_values.insert(last.0);
            }
            if value != last.0 {
                h.rerender(value);
                last = (value, now);
            }
            prop_assert!(h.timers().pending() <= 1);

            h.tick(ms(gap));
            now += gap;
            if now - last.1 >= DELAY_MS {
                stable_values.insert(last.0);
            }
            prop_assert!(stable_values.contains(h.result()));
        }

        h.tick(ms(DELAY_MS));
        prop_assert_eq!(*h.result(), last.0);
    }

    #[test]
    fn timeout_fires_once_per_delay(
        delays in prop::collection::vec(prop::option::of(1u64..50), 1..12),
        unmount_at in 0usize..16,
    ) {
        let calls = Rc::new(Cell::new(0usize));
        let c = calls.clone();
        let mut h = RenderHook::new(delays[0], move |cx, d: &Option<u64>| {
            let c = c.clone();
            use_timeout(cx, move || c.set(c.get() + 1), d.map(ms));
        });

        let mut expected = 0;
        let mut prev = delays[0];
        for (i, delay) in delays.iter().copied().enumerate() {
            if i == unmount_at {
                h.unmount();
            }
            if i > 0 {
                h.rerender(delay);
            }
            let rescheduled = i == 0 || delay != prev;
            if h.is_mounted() && rescheduled && delay.is_some() {
                expected += 1;
            }
            prev = delay;

            // longer than any delay: whatever was scheduled fires now
            h.tick(ms(100));
            prop_assert_eq!(calls.get(), expected);
        }
    }

    #[test]
    fn set_reset_restores_initial(
        initial in prop::collection::hash_set(0u8..8, 0..5),
        ops in prop::collection::vec(set_op(), 0..20),
    ) {
        let seed: Vec<u8> = initial.iter().copied().collect();
        let mut h = RenderHook::new(seed, |cx, init: &Vec<u8>| use_set(cx, init.clone()));

        let mut model = initial.clone();
        for op in ops {
            h.act(|s| match &op {
                SetOp::Add(x) => s.add(*x),
                SetOp::Remove(x) => s.remove(x),
                SetOp::Toggle(x) => s.toggle(*x),
                SetOp::Clear => s.clear(),
            });
            match op {
                SetOp::Add(x) => { model.insert(x); }
                SetOp::Remove(x) => { model.remove(&x); }
                SetOp::Toggle(x) => {
                    if !model.remove(&x) {
                        model.insert(x);
                    }
                }
                SetOp::Clear => model.clear(),
            }
            prop_assert_eq!(&*h.result().set(), &model);
        }

        h.rerender(vec![42]);
        h.act(|s| s.reset());
        prop_assert_eq!(&*h.result().set(), &initial);
    }

    #[test]
    fn input_reset_is_idempotent(
        initial in "[a-z]{0,6}",
        edits in prop::collection::vec(prop::option::of("[a-z]{0,6}"), 0..10),
        later_initial in "[a-z]{0,6}",
    ) {
        let mut h = RenderHook::new(initial.clone(), |cx, init: &String| {
            use_input_control(cx, init.clone())
        });
        for edit in edits {
            h.act(|c| match edit {
                Some(v) => c.handle_change(v),
                None => c.handle_blur(),
            });
        }
        h.rerender(later_initial);

        h.act(|c| c.reset());
        let once = h.result().snapshot();
        h.act(|c| c.reset());
        prop_assert_eq!(h.result().snapshot(), once);
        prop_assert_eq!(h.result().value(), initial);
        prop_assert!(!h.result().dirty() && !h.result().touched() && !h.result().different());
    }
}
