use std::cell::RefCell;
use std::rc::Rc;

use hookset_core::{Composer, DerivedState, Signal};

/// Value shown while the held value is absent.
pub enum Fallback<T> {
    Value(T),
    /// Computed on the first read that needs it, then memoized for the
    /// lifetime of the instance.
    Lazy(Rc<dyn Fn() -> T>),
}

impl<T> Fallback<T> {
    pub fn lazy(f: impl Fn() -> T + 'static) -> Self {
        Fallback::Lazy(Rc::new(f))
    }
}

impl<T: Clone> Clone for Fallback<T> {
    fn clone(&self) -> Self {
        match self {
            Fallback::Value(v) => Fallback::Value(v.clone()),
            Fallback::Lazy(f) => Fallback::Lazy(f.clone()),
        }
    }
}

enum Resolved<T: Clone + 'static> {
    Value(T),
    Lazy(DerivedState<T>),
}

impl<T: Clone + 'static> Resolved<T> {
    fn new(fallback: Fallback<T>) -> Self {
        match fallback {
            Fallback::Value(v) => Resolved::Value(v),
            Fallback::Lazy(f) => Resolved::Lazy(DerivedState::from_rc(f)),
        }
    }

    /// A plain value always replaces; a lazy default keeps its memo.
    fn refresh(&mut self, fallback: Fallback<T>) {
        if matches!(self, Resolved::Lazy(_)) && matches!(fallback, Fallback::Lazy(_)) {
            return;
        }
        *self = Resolved::new(fallback);
    }

    fn get(&self) -> T {
        match self {
            Resolved::Value(v) => v.clone(),
            Resolved::Lazy(d) => d.get(),
        }
    }
}

/// Handle returned by [`use_default`].
pub struct DefaultState<T: Clone + 'static> {
    raw: Signal<Option<T>>,
    fallback: Rc<RefCell<Resolved<T>>>,
}

impl<T: Clone + 'static> Clone for DefaultState<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<T: Clone + 'static> DefaultState<T> {
    /// The held value, or the fallback when it is absent.
    pub fn get(&self) -> T {
        match self.raw() {
            Some(v) => v,
            None => self.fallback.borrow().get(),
        }
    }

    /// The held value exactly as last set, absence included.
    pub fn raw(&self) -> Option<T> {
        self.raw.get()
    }

    pub fn is_absent(&self) -> bool {
        self.raw.with(Option::is_none)
    }

    /// Always overwrites, absence included; no equality check.
    pub fn set(&self, value: Option<T>) {
        self.raw.set(value);
    }
}

/// A value that reads as `default` whenever it is absent.
///
/// The slot keeps the raw value; substitution happens on read. `default`
/// follows the argument of the latest pass.
pub fn use_default<T: Clone + 'static>(
    cx: &mut Composer,
    default: T,
    initial: Option<T>,
) -> DefaultState<T> {
    use_default_with(cx, Fallback::Value(default), move || initial)
}

/// [`use_default`] with a default computed at most once per instance.
pub fn use_default_lazy<T: Clone + 'static>(
    cx: &mut Composer,
    default: impl Fn() -> T + 'static,
    initial: Option<T>,
) -> DefaultState<T> {
    use_default_with(cx, Fallback::lazy(default), move || initial)
}

/// General form: any [`Fallback`], and an initial raw value computed only on
/// the first pass.
pub fn use_default_with<T: Clone + 'static>(
    cx: &mut Composer,
    default: Fallback<T>,
    initial: impl FnOnce() -> Option<T>,
) -> DefaultState<T> {
    let raw = cx.remember_state(initial);
    let first = default.clone();
    let fallback = cx.remember(move || RefCell::new(Resolved::new(first)));
    fallback.borrow_mut().refresh(default);

    DefaultState {
        raw,
        fallback: fallback.clone(),
    }
}
