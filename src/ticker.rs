//! Ownership of the repeating tick.
//!
//! Exactly one tick stream may exist per countdown; two would double the
//! decrement rate. `TickSlot` holds the only handle, and arming it always
//! drops the previous one first. gloo's `Interval` cancels itself on drop,
//! so dropping is cancelling.

/// Holder for at most one live tick handle.
#[derive(Debug)]
pub struct TickSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TickSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TickSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any existing tick, then install the one built by `schedule`.
    pub fn arm(&mut self, schedule: impl FnOnce() -> H) {
        self.disarm();
        self.handle = Some(schedule());
    }

    /// Cancel the current tick, if any. Returns whether one was live.
    pub fn disarm(&mut self) -> bool {
        self.handle.take().is_some()
    }

}
