use std::cell::{Cell, RefCell};

/// A one-shot notification that can arrive while its receiver is borrowed.
///
/// JS callbacks re-enter Rust at arbitrary points, including from inside a
/// bridge call made while the viewer is borrowed. Those arrivals are parked
/// here and picked up by the next frame.
#[derive(Debug, Default)]
pub struct Deferred {
    pending: Cell<bool>,
}

impl Deferred {
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(false),
        }
    }

    #[inline]
    pub fn raise(&self) {
        self.pending.set(true);
    }

    /// Clear the flag, returning whether it was set.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

/// Run `f` on `cell` now if it can be mutably borrowed; otherwise raise
/// `pending` so the owner runs it later. Returns whether `f` ran.
pub fn deliver_or_defer<T>(cell: &RefCell<T>, pending: &Deferred, f: impl FnOnce(&mut T)) -> bool {
    match cell.try_borrow_mut() {
        Ok(mut value) => {
            f(&mut value);
            true
        }
        Err(_) => {
            pending.raise();
            false
        }
    }
}
