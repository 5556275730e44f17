use std::any::{Any, TypeId};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::scope::Scope;
use crate::signal::Signal;
use crate::timer::Timers;

/// Shared "render me again" flag for one instance.
#[derive(Clone, Default)]
pub struct Recomposer(Rc<Cell<bool>>);

impl Recomposer {
    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

pub(crate) type PendingEffect = Box<dyn FnOnce()>;

/// Per-instance slot store and lifecycle owner.
///
/// The host calls [`Composer::compose`] once per render pass; primitives take
/// `&mut Composer` and claim slots in call order.
pub struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    scope: Scope,
    timers: Timers,
    recompose: Recomposer,
    pub(crate) pending: SmallVec<[PendingEffect; 4]>,
    locals: HashMap<TypeId, Rc<dyn Any>>,
}

impl Composer {
    pub fn new(timers: Timers) -> Self {
        Self {
            slots: Vec::new(),
            cursor: 0,
            scope: Scope::new(),
            timers,
            recompose: Recomposer::default(),
            pending: SmallVec::new(),
            locals: HashMap::new(),
        }
    }

    /// One render pass: run `f`, then commit queued effects in order.
    pub fn compose<R>(&mut self, f: impl FnOnce(&mut Composer) -> R) -> R {
        self.cursor = 0;
        self.recompose.take();
        let result = f(self);
        self.commit();
        result
    }

    fn commit(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for effect in pending {
            effect();
        }
    }

    /// Slot-based remember (sequential composition only)
    pub fn remember<T: 'static>(&mut self, init: impl FnOnce() -> T) -> Rc<T> {
        let cursor = self.cursor;
        self.cursor += 1;

        if cursor >= self.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            self.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = self.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 Primitives must be called in the same order on every pass.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            self.slots[cursor] = Box::new(rc.clone());
            rc
        }
    }

    /// Remembered [`Signal`] whose writes request re-composition.
    pub fn remember_state<T: 'static>(&mut self, init: impl FnOnce() -> T) -> Signal<T> {
        let recompose = self.recompose.clone();
        let slot = self.remember(move || {
            let s = Signal::new(init());
            s.subscribe(move |_| recompose.request());
            s
        });
        (*slot).clone()
    }

    pub fn provide_local<T: 'static>(&mut self, value: T) {
        self.locals.insert(TypeId::of::<T>(), Rc::new(value));
    }

    pub fn local<T: 'static>(&self) -> Option<Rc<T>> {
        self.locals
            .get(&TypeId::of::<T>())
            .and_then(|v| v.clone().downcast::<T>().ok())
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn recomposer(&self) -> Recomposer {
        self.recompose.clone()
    }

    pub fn needs_recompose(&self) -> bool {
        self.recompose.is_requested()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Tears the instance down: every registered cleanup runs once.
    pub fn dispose(mut self) {
        self.pending.clear();
        let scope = std::mem::take(&mut self.scope);
        scope.dispose();
    }
}
