use std::cell::{Cell, RefCell};

use crate::{Composer, Dispose};

impl Composer {
    /// Post-render effect with cleanup on key change or teardown.
    ///
    /// When `key` differs from the previous pass (or on the first pass), the
    /// effect is queued for commit. At commit, the previous cleanup for this
    /// call site runs before the new effect.
    pub fn disposable_effect<K: PartialEq + 'static>(
        &mut self,
        key: K,
        effect: impl FnOnce() -> Dispose + 'static,
    ) {
        let last_key = self.remember(|| RefCell::new(None::<K>));
        let cleanup_slot = self.remember(|| RefCell::new(None::<Dispose>));
        let installed = self.remember(|| Cell::new(false));

        // Install a single teardown disposer for this call site.
        if !installed.replace(true) {
            let cleanup_slot = cleanup_slot.clone();
            self.scope().add_disposer(move || {
                let d = cleanup_slot.borrow_mut().take();
                if let Some(d) = d {
                    d.run();
                }
            });
        }

        let changed = last_key.borrow().as_ref() != Some(&key);
        if !changed {
            return;
        }
        *last_key.borrow_mut() = Some(key);

        self.pending.push(Box::new(move || {
            let previous = cleanup_slot.borrow_mut().take();
            if let Some(d) = previous {
                d.run();
            }
            let d = effect();
            *cleanup_slot.borrow_mut() = Some(d);
        }));
    }
}
