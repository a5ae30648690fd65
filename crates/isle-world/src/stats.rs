//! Day-wide counters.
//!
//! Every counter is an independent `AtomicU64` that only ever increases.
//! There is no lock and no cross-counter atomicity: a snapshot taken while
//! the day runs may be torn between counters, but a snapshot taken after
//! quiescence is exact.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use isle_core::{DeathCause, IncidentKind};
use serde::Serialize;

pub struct Stats {
    total_passengers: AtomicU64,
    boarded:          AtomicU64,
    stranded:         AtomicU64,
    deaths:           [AtomicU64; DeathCause::COUNT],
    incidents:        [AtomicU64; IncidentKind::COUNT],
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_passengers: AtomicU64::new(0),
            boarded:          AtomicU64::new(0),
            stranded:         AtomicU64::new(0),
            deaths:           [const { AtomicU64::new(0) }; DeathCause::COUNT],
            incidents:        [const { AtomicU64::new(0) }; IncidentKind::COUNT],
        }
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_passenger(&self) {
        self.total_passengers.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_boarded(&self) {
        self.boarded.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_stranded(&self) {
        self.stranded.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_death(&self, cause: DeathCause) {
        self.deaths[cause.slot()].fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_incident(&self, kind: IncidentKind) {
        self.incidents[kind.slot()].fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_passengers: self.total_passengers.load(Ordering::Relaxed),
            boarded:          self.boarded.load(Ordering::Relaxed),
            stranded:         self.stranded.load(Ordering::Relaxed),
            deaths: DeathCause::ALL
                .iter()
                .map(|&c| (c, self.deaths[c.slot()].load(Ordering::Relaxed)))
                .collect(),
            incidents: IncidentKind::ALL
                .iter()
                .map(|&k| (k, self.incidents[k.slot()].load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

/// Plain copy of [`Stats`] at one instant.  Every cause and incident kind
/// is present, zero or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_passengers: u64,
    pub boarded:          u64,
    pub stranded:         u64,
    pub deaths:           BTreeMap<DeathCause, u64>,
    pub incidents:        BTreeMap<IncidentKind, u64>,
}

impl StatsSnapshot {
    pub fn deaths_by(&self, cause: DeathCause) -> u64 {
        self.deaths.get(&cause).copied().unwrap_or(0)
    }

    pub fn incidents_of(&self, kind: IncidentKind) -> u64 {
        self.incidents.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_deaths(&self) -> u64 {
        self.deaths.values().sum()
    }

    pub fn total_incidents(&self) -> u64 {
        self.incidents.values().sum()
    }

    /// `true` when boarded, stranded and dead account for every passenger.
    pub fn is_balanced(&self) -> bool {
        self.boarded + self.stranded + self.total_deaths() == self.total_passengers
    }
}
