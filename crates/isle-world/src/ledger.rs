//! Terminal outcome registries.
//!
//! Each passenger appends exactly one entry, from its own thread, when its
//! outcome is decided.  Readers (the death report, the tournament, per-ship
//! tallies) run only after every passenger thread has been joined.

use std::time::Instant;

use isle_agent::PassengerProfile;
use isle_core::{DeathCause, Outcome};
use parking_lot::Mutex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    pub profile:    PassengerProfile,
    pub outcome:    Outcome,
    /// When the outcome was fixed.  For boarders and strandees, taken just
    /// before `departed` was read.
    pub decided_at: Instant,
}

/// Boarded, stranded and dead passengers in one append-only log.
#[derive(Default)]
pub struct OutcomeLedger {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl OutcomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, profile: PassengerProfile, outcome: Outcome, decided_at: Instant) {
        self.entries.lock().push(LedgerEntry { profile, outcome, decided_at });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Copy of every entry, in recording order.
    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries.lock().clone()
    }

    /// The stranded registry.
    pub fn stranded(&self) -> Vec<PassengerProfile> {
        self.select(|o| matches!(o, Outcome::Stranded))
            .into_iter()
            .map(|e| e.profile)
            .collect()
    }

    pub fn boarded(&self) -> Vec<PassengerProfile> {
        self.select(|o| matches!(o, Outcome::Boarded))
            .into_iter()
            .map(|e| e.profile)
            .collect()
    }

    /// The dead registry, with causes.
    pub fn dead(&self) -> Vec<(PassengerProfile, DeathCause)> {
        self.entries
            .lock()
            .iter()
            .filter_map(|e| match e.outcome {
                Outcome::Dead(cause) => Some((e.profile, cause)),
                _ => None,
            })
            .collect()
    }

    fn select(&self, keep: impl Fn(Outcome) -> bool) -> Vec<LedgerEntry> {
        self.entries.lock().iter().filter(|e| keep(e.outcome)).copied().collect()
    }
}
