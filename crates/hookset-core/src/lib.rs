//! # Slots, Effects, and Timers
//!
//! `hookset-core` is the embedding side of hookset. A host owns one
//! [`Composer`] per component instance and calls [`Composer::compose`] on
//! every render pass. Primitives (in the `hookset` crate) take
//! `&mut Composer` and never touch global or thread-local state.
//!
//! There are four main pieces:
//!
//! - `remember*`: persistent slots bound to the instance.
//! - `disposable_effect`: post-render side-effects with cleanup.
//! - `TimerQueue` / `TimerSlot`: one-shot timers and the owned handle that
//!   enforces cancel-before-reschedule.
//! - `Scope`: teardown; runs every cleanup exactly once.
//!
//! ## Remembered state
//!
//! ```rust
//! use hookset_core::*;
//!
//! let mut cx = Composer::new(TimerQueue::new());
//! let first = cx.compose(|cx| cx.remember_state(|| 0));
//! first.set(7);
//! assert!(cx.needs_recompose());
//!
//! let second = cx.compose(|cx| cx.remember_state(|| 0));
//! assert_eq!(second.get(), 7);
//! ```
//!
//! `remember` is order-based: the Nth call in a pass always refers to the Nth
//! stored value, so primitives must be called unconditionally.
//!
//! ## Effects and cleanup
//!
//! ```rust
//! use hookset_core::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let log = Rc::new(Cell::new(0));
//! let mut cx = Composer::new(TimerQueue::new());
//! for key in [1, 1, 2] {
//!     let log = log.clone();
//!     cx.compose(move |cx| {
//!         cx.disposable_effect(key, move || {
//!             log.set(log.get() + 1);
//!             Dispose::noop()
//!         })
//!     });
//! }
//! assert_eq!(log.get(), 2);
//! cx.dispose();
//! ```
//!
//! Effects run after the pass returns, in registration order. The previous
//! cleanup for a call site always runs before its next effect, and once more
//! at teardown.

pub mod clock;
pub mod effects;
pub mod effects_ext;
pub mod error;
pub mod harness;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod state;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use error::*;
pub use harness::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use state::*;
pub use timer::*;

pub use web_time::Duration;
