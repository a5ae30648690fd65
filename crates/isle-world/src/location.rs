//! Capacity-gated attractions.
//!
//! # Occupancy protocol
//!
//! [`Location::try_enter`] either claims a slot and returns an
//! [`Occupancy`] guard, or returns `None` immediately when the location is
//! full.  The slot is released exactly once: by [`Occupancy::leave`], or by
//! the guard's `Drop` on any other exit path (including the holder's
//! death).  There is no other way to decrement, so a double release or a
//! negative occupancy cannot be expressed.
//!
//! The bounded increment is a single compare-and-swap loop; no lock is held
//! while the passenger dwells.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use isle_core::{
    HazardConfig, IncidentConfig, LocationConfig, LocationId, LocationKind, PassengerId, TimeScale,
};
use serde::Serialize;

/// One attraction and its live occupancy.
#[derive(Debug)]
pub struct Location {
    pub id:       LocationId,
    pub name:     String,
    pub kind:     LocationKind,
    /// Maximum simultaneous occupants (at least 1).
    pub capacity: u32,
    /// Length of a normal stay, in simulated seconds.
    pub base_duration_secs: f64,
    /// Distance from the pier.
    pub distance: f64,
    pub hazard:   Option<HazardConfig>,
    pub incident: Option<IncidentConfig>,

    occupancy:  AtomicU32,
    peak:       AtomicU32,
    visits:     AtomicU64,
    rejections: AtomicU64,
}

impl Location {
    pub fn new(
        id:                 LocationId,
        name:               impl Into<String>,
        kind:               LocationKind,
        capacity:           u32,
        base_duration_secs: f64,
        distance:           f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            capacity,
            base_duration_secs,
            distance,
            hazard: None,
            incident: None,
            occupancy: AtomicU32::new(0),
            peak: AtomicU32::new(0),
            visits: AtomicU64::new(0),
            rejections: AtomicU64::new(0),
        }
    }

    /// Build from configuration; `base_hours` is converted with `time`.
    pub fn from_config(id: LocationId, cfg: &LocationConfig, time: &TimeScale) -> Self {
        let mut loc = Self::new(
            id,
            cfg.name.clone(),
            cfg.kind,
            cfg.capacity,
            time.hours(cfg.base_hours),
            cfg.distance,
        );
        loc.hazard = cfg.hazard.clone();
        loc.incident = cfg.incident.clone();
        loc
    }

    /// Claim a slot if one is free.  Never blocks.
    pub fn try_enter(&self, passenger: PassengerId) -> Option<Occupancy<'_>> {
        let claimed = self.occupancy.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
            (n < self.capacity).then_some(n + 1)
        });
        match claimed {
            Ok(before) => {
                let occupancy = before + 1;
                self.peak.fetch_max(occupancy, Ordering::Relaxed);
                self.visits.fetch_add(1, Ordering::Relaxed);
                Some(Occupancy { location: self, passenger, occupancy, released: false })
            }
            Err(_) => {
                self.rejections.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Current number of occupants.
    #[inline]
    pub fn occupancy(&self) -> u32 {
        self.occupancy.load(Ordering::Acquire)
    }

    /// Usage counters accumulated so far.
    pub fn usage(&self) -> LocationUsage {
        LocationUsage {
            location:   self.id,
            name:       self.name.clone(),
            capacity:   self.capacity,
            visits:     self.visits.load(Ordering::Relaxed),
            rejections: self.rejections.load(Ordering::Relaxed),
            peak:       self.peak.load(Ordering::Relaxed),
            occupancy:  self.occupancy(),
        }
    }

    /// Give back one slot; returns the occupancy after release.
    fn release(&self) -> u32 {
        let before = self.occupancy.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(before > 0, "{}: released a slot nobody held", self.name);
        before - 1
    }
}

/// A held capacity slot.  Releases itself exactly once.
#[must_use = "dropping an Occupancy immediately gives the slot back"]
#[derive(Debug)]
pub struct Occupancy<'a> {
    location:  &'a Location,
    passenger: PassengerId,
    occupancy: u32,
    released:  bool,
}

impl<'a> Occupancy<'a> {
    pub fn location(&self) -> &'a Location {
        self.location
    }

    pub fn passenger(&self) -> PassengerId {
        self.passenger
    }

    /// Occupancy right after this slot was claimed.
    pub fn occupancy_on_entry(&self) -> u32 {
        self.occupancy
    }

    /// Release the slot; returns the occupancy after leaving.
    pub fn leave(mut self) -> u32 {
        self.released = true;
        self.location.release()
    }
}

impl Drop for Occupancy<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.location.release();
        }
    }
}

/// Per-location usage for the day report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocationUsage {
    pub location:   LocationId,
    pub name:       String,
    pub capacity:   u32,
    /// Successful entries.
    pub visits:     u64,
    /// Capacity rejections.
    pub rejections: u64,
    /// Highest simultaneous occupancy observed.
    pub peak:       u32,
    /// Occupancy when the usage was read.  Zero once the day has quiesced.
    pub occupancy:  u32,
}
