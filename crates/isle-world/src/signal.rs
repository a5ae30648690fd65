//! One-shot broadcast signal.
//!
//! A `Signal` moves from unset to set exactly once and then stays set.  Any
//! number of threads may block on it; firing wakes all of them.  Both the
//! flag and its firing instant live under one mutex, so a reader that
//! observes "set" also observes everything the firing thread did before
//! firing, and a reader that observes "unset" is ordered strictly before
//! the firing.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Default)]
pub struct Signal {
    fired: Mutex<Option<Instant>>,
    cond:  Condvar,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signal and wake every waiter.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// signal was already set (the call is then a no-op).
    pub fn fire(&self) -> bool {
        let mut fired = self.fired.lock();
        if fired.is_some() {
            return false;
        }
        *fired = Some(Instant::now());
        drop(fired);
        self.cond.notify_all();
        true
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.fired.lock().is_some()
    }

    /// When the signal fired, if it has.
    pub fn fired_at(&self) -> Option<Instant> {
        *self.fired.lock()
    }

    /// Block until the signal is set.
    pub fn wait(&self) {
        let mut fired = self.fired.lock();
        while fired.is_none() {
            self.cond.wait(&mut fired);
        }
    }

    /// Block until the signal is set or `timeout` elapses, whichever comes
    /// first.  Returns `true` if the signal is set.
    ///
    /// Spurious wake-ups re-check the flag against the original deadline,
    /// so the total wait never exceeds `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return true;
        };
        let mut fired = self.fired.lock();
        while fired.is_none() {
            if self.cond.wait_until(&mut fired, deadline).timed_out() {
                break;
            }
        }
        fired.is_some()
    }
}
