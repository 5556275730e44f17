use std::cell::RefCell;
use std::rc::Rc;

/// Lazily computed value, cached after the first `get` until invalidated.
pub struct DerivedState<T: Clone + 'static> {
    compute: Rc<dyn Fn() -> T>,
    cached: RefCell<Option<T>>,
}

impl<T: Clone + 'static> DerivedState<T> {
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        Self::from_rc(Rc::new(compute))
    }

    pub fn from_rc(compute: Rc<dyn Fn() -> T>) -> Self {
        Self {
            compute,
            cached: RefCell::new(None),
        }
    }

    pub fn invalidate(&self) {
        *self.cached.borrow_mut() = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.borrow().is_some()
    }

    pub fn get(&self) -> T {
        if let Some(v) = self.cached.borrow().as_ref() {
            return v.clone();
        }
        let v = (self.compute)();
        *self.cached.borrow_mut() = Some(v.clone());
        v
    }
}
