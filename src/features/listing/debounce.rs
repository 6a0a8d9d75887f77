//! Trailing-edge debounce shared by both directory screens so rapid page
//! clicks and search commits collapse into one dispatch instead of a burst of
//! overlapping fetches.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Default delay applied to user-triggered refetches.
pub(crate) const REFETCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone)]
pub(crate) struct Debounce {
    pending: Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
            delay_ms,
        }
    }

    /// Schedules `action`, cancelling any previously scheduled one.
    pub fn run(&self, action: impl FnOnce() + 'static) {
        let mut slot = self.pending.borrow_mut();
        if let Some(timeout) = slot.take() {
            timeout.cancel();
        }

        let pending = Rc::clone(&self.pending);
        *slot = Some(Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            action();
        }));
    }
}
