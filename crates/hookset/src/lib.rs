//! # Hookset
//!
//! Lifecycle-bound state primitives. Each one is a plain function taking the
//! instance's [`Composer`](hookset_core::Composer), called unconditionally on
//! every render pass:
//!
//! - [`use_debounce`]: a value that settles after `delay` without changes.
//! - [`use_timeout`]: one deferred call to the latest callback.
//! - [`use_default`]: a value that reads as a default while absent.
//! - [`use_input_control`]: dirty/touched/different tracking for a field.
//! - [`use_set`]: a copy-on-write set with toggle and reset.
//! - [`use_counter`]: an integer counter.
//! - [`use_media_query`]: a subscription to a host media query.
//!
//! ```rust
//! use hookset::*;
//! use hookset_core::{Duration, RenderHook};
//!
//! let mut h = RenderHook::new(String::from("a"), |cx, query: &String| {
//!     use_debounce(cx, query.clone(), Duration::from_millis(300))
//! });
//! h.rerender("ab".into());
//! h.tick(Duration::from_millis(100));
//! h.rerender("abc".into());
//! h.tick(Duration::from_millis(300));
//! assert_eq!(h.result(), "abc");
//! ```
//!
//! Timers go through the instance's `TimerQueue` and are cancelled before
//! every reschedule and at teardown, so no callback ever lands on a
//! torn-down instance.

pub mod counter;
pub mod debounce;
pub mod default;
pub mod input_control;
pub mod media_query;
pub mod set;
pub mod timeout;

pub use counter::*;
pub use debounce::*;
pub use default::*;
pub use input_control::*;
pub use media_query::*;
pub use set::*;
pub use timeout::*;
