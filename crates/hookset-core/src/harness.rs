//! Drives one component instance through render passes.
//!
//! ```rust
//! use hookset_core::*;
//!
//! let mut h = RenderHook::new(3, |cx, start: &i32| cx.remember_state(|| *start));
//! h.act(|n| n.update(|v| *v += 1));
//! assert_eq!(h.result().get(), 4);
//! assert_eq!(h.render_count(), 2);
//! ```

use web_time::Duration;

use crate::{Composer, TimerQueue, Timers};

const MAX_RECOMPOSE_PASSES: usize = 64;

type Hook<P, R> = Box<dyn FnMut(&mut Composer, &P) -> R>;

pub struct RenderHook<P, R> {
    composer: Option<Composer>,
    timers: Timers,
    hook: Hook<P, R>,
    props: P,
    result: R,
    renders: usize,
}

impl<P: 'static, R: 'static> RenderHook<P, R> {
    /// Mounts `hook` on a fresh instance with its own virtual-time queue.
    pub fn new(props: P, hook: impl FnMut(&mut Composer, &P) -> R + 'static) -> Self {
        Self::mount(Composer::new(TimerQueue::new()), props, hook)
    }

    /// Mounts `hook` on a prepared instance (locals provided, custom queue).
    pub fn mount(
        mut composer: Composer,
        props: P,
        hook: impl FnMut(&mut Composer, &P) -> R + 'static,
    ) -> Self {
        let mut hook: Hook<P, R> = Box::new(hook);
        let timers = composer.timers().clone();
        let result = composer.compose(|cx| hook(cx, &props));
        let mut this = Self {
            composer: Some(composer),
            timers,
            hook,
            props,
            result,
            renders: 1,
        };
        this.flush();
        this
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn is_mounted(&self) -> bool {
        self.composer.is_some()
    }

    pub fn rerender(&mut self, props: P) {
        self.props = props;
        self.render();
        self.flush();
    }

    /// Runs `f` against the latest result, then settles re-composition.
    pub fn act(&mut self, f: impl FnOnce(&R)) {
        f(&self.result);
        self.flush();
    }

    /// Advances the timer queue, then settles re-composition.
    pub fn tick(&mut self, by: Duration) {
        self.timers.advance(by);
        self.flush();
    }

    /// Tears the instance down. The last result stays readable.
    pub fn unmount(&mut self) {
        if let Some(composer) = self.composer.take() {
            composer.dispose();
        }
    }

    fn render(&mut self) {
        let Some(composer) = self.composer.as_mut() else {
            return;
        };
        let hook = &mut self.hook;
        let props = &self.props;
        self.result = composer.compose(|cx| hook(cx, props));
        self.renders += 1;
    }

    fn flush(&mut self) {
        for _ in 0..MAX_RECOMPOSE_PASSES {
            let dirty = self
                .composer
                .as_ref()
                .is_some_and(|composer| composer.needs_recompose());
            if !dirty {
                return;
            }
            self.render();
        }
        log::warn!(
            "render_hook: still requesting re-composition after {MAX_RECOMPOSE_PASSES} passes"
        );
    }
}

impl<P, R> Drop for RenderHook<P, R> {
    fn drop(&mut self) {
        if let Some(composer) = self.composer.take() {
            composer.dispose();
        }
    }
}
