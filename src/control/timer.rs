//! One-shot deferred signal with a cancellation handle

use crossbeam_channel::{after, never, Receiver};
use std::time::{Duration, Instant};

/// Fires once, `delay` after it was armed
///
/// Dropping the value cancels it: the owner simply stops listening.
#[derive(Debug)]
pub struct Deferred {
    rx: Receiver<Instant>,
}

impl Deferred {
    pub fn after(delay: Duration) -> Self {
        Self { rx: after(delay) }
    }

    /// Receiver for use in `select!`
    pub fn receiver(&self) -> Receiver<Instant> {
        self.rx.clone()
    }

    /// Non-blocking check; consumes the signal when it has fired
    pub fn fire_if_due(&self) -> bool {
        self.rx.try_recv().is_ok()
    }

    pub fn cancel(self) {}
}

/// Receiver of an optional deferred signal; never fires when there is none
pub fn signal_of(deferred: Option<&Deferred>) -> Receiver<Instant> {
    deferred.map(Deferred::receiver).unwrap_or_else(never)
}
