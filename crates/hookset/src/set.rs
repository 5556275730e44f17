use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use hookset_core::{Composer, Signal};

/// Current snapshot plus the creation-time anchor.
///
/// Snapshots are never mutated in place: every write swaps in a new `Rc`.
#[derive(Debug)]
pub struct TrackedSet<T> {
    initial: Rc<HashSet<T>>,
    current: Rc<HashSet<T>>,
}

impl<T: Eq + Hash + Clone> TrackedSet<T> {
    pub fn new(initial: HashSet<T>) -> Self {
        let initial = Rc::new(initial);
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn current(&self) -> &Rc<HashSet<T>> {
        &self.current
    }

    fn write(&mut self, f: impl FnOnce(&mut HashSet<T>)) {
        let mut next = HashSet::clone(&self.current);
        f(&mut next);
        self.current = Rc::new(next);
    }

    pub fn add(&mut self, item: T) {
        self.write(|s| {
            s.insert(item);
        });
    }

    pub fn remove(&mut self, item: &T) {
        self.write(|s| {
            s.remove(item);
        });
    }

    pub fn toggle(&mut self, item: T) {
        self.write(|s| {
            if !s.remove(&item) {
                s.insert(item);
            }
        });
    }

    pub fn clear(&mut self) {
        self.current = Rc::new(HashSet::new());
    }

    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }
}

/// Handle returned by [`use_set`].
pub struct SetControl<T: 'static>(Signal<TrackedSet<T>>);

impl<T> Clone for SetControl<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Eq + Hash + Clone + 'static> SetControl<T> {
    /// Current snapshot; later writes never show through it.
    pub fn set(&self) -> Rc<HashSet<T>> {
        self.0.with(|s| s.current().clone())
    }

    pub fn contains(&self, item: &T) -> bool {
        self.0.with(|s| s.current().contains(item))
    }

    pub fn len(&self) -> usize {
        self.0.with(|s| s.current().len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(|s| s.current().is_empty())
    }

    pub fn add(&self, item: T) {
        self.0.update(|s| s.add(item));
    }

    pub fn remove(&self, item: &T) {
        self.0.update(|s| s.remove(item));
    }

    /// Adds `item` if absent, removes it if present.
    pub fn toggle(&self, item: T) {
        self.0.update(|s| s.toggle(item));
    }

    pub fn clear(&self) {
        self.0.update(TrackedSet::clear);
    }

    /// Restores the creation-time snapshot.
    pub fn reset(&self) {
        self.0.update(TrackedSet::reset);
    }
}

/// A set whose `reset` goes back to `initial` as given on the first pass.
///
/// `initial` is only iterated on the first pass.
pub fn use_set<T: Eq + Hash + Clone + 'static>(
    cx: &mut Composer,
    initial: impl IntoIterator<Item = T>,
) -> SetControl<T> {
    SetControl(cx.remember_state(move || TrackedSet::new(initial.into_iter().collect())))
}
