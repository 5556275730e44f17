//! Form-field interaction tracking.
//!
//! `dirty` and `touched` are independent, monotonic facts: once set they stay
//! set until [`InputControl::reset`]. `different` is derived from the anchor
//! on every read.

use bitflags::bitflags;
use hookset_core::{Composer, Signal};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputFlags: u8 {
        /// A change was handled since creation or the last reset.
        const DIRTY = 1;
        /// A blur was handled since creation or the last reset.
        const TOUCHED = 1 << 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputState<T> {
    anchor: T,
    value: T,
    flags: InputFlags,
}

impl<T: Clone + PartialEq> InputState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            anchor: initial.clone(),
            value: initial,
            flags: InputFlags::empty(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn anchor(&self) -> &T {
        &self.anchor
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    pub fn dirty(&self) -> bool {
        self.flags.contains(InputFlags::DIRTY)
    }

    pub fn touched(&self) -> bool {
        self.flags.contains(InputFlags::TOUCHED)
    }

    pub fn different(&self) -> bool {
        self.value != self.anchor
    }

    pub fn change(&mut self, value: T) {
        self.flags.insert(InputFlags::DIRTY);
        self.value = value;
    }

    pub fn blur(&mut self) {
        self.flags.insert(InputFlags::TOUCHED);
    }

    pub fn reset(&mut self) {
        self.flags = InputFlags::empty();
        self.value = self.anchor.clone();
    }
}

/// Handle returned by [`use_input_control`].
pub struct InputControl<T: 'static>(Signal<InputState<T>>);

impl<T> Clone for InputControl<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone + PartialEq + 'static> InputControl<T> {
    pub fn value(&self) -> T {
        self.0.with(|s| s.value().clone())
    }

    pub fn dirty(&self) -> bool {
        self.0.with(InputState::dirty)
    }

    pub fn touched(&self) -> bool {
        self.0.with(InputState::touched)
    }

    pub fn different(&self) -> bool {
        self.0.with(InputState::different)
    }

    pub fn snapshot(&self) -> InputState<T> {
        self.0.get()
    }

    pub fn handle_change(&self, value: T) {
        self.0.update(|s| s.change(value));
    }

    pub fn handle_blur(&self) {
        self.0.update(InputState::blur);
    }

    /// Back to the creation-time value with both flags cleared.
    pub fn reset(&self) {
        self.0.update(InputState::reset);
    }
}

/// Tracks a controlled input's value plus dirty/touched/different.
///
/// `initial` is captured on the first pass only; later arguments do not move
/// the anchor, so `reset` always returns to the construction-time value.
/// Remount the instance to reset to a newer value.
pub fn use_input_control<T: Clone + PartialEq + 'static>(
    cx: &mut Composer,
    initial: T,
) -> InputControl<T> {
    InputControl(cx.remember_state(move || InputState::new(initial)))
}
