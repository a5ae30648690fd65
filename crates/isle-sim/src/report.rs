//! End-of-day report.

use isle_agent::PassengerProfile;
use isle_core::{DeathCause, MatchRecord, Outcome, PassengerId, ShipId};
use isle_world::{LedgerEntry, LocationUsage, Ship, StatsSnapshot};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Everything the day produced.  Built only after quiescence.
#[derive(Clone, Debug, Serialize)]
pub struct DayReport {
    pub stats:     StatsSnapshot,
    /// Everyone who died, in order of death.
    pub dead:      Vec<DeadPassenger>,
    /// The stranded registry, in stranding order.
    pub stranded:  Vec<PassengerId>,
    pub matches:   Vec<MatchRecord>,
    pub survivor:  Option<PassengerId>,
    pub ships:     Vec<ShipReport>,
    pub locations: Vec<LocationUsage>,
    /// Ambient events announced during the day.
    pub ambient_events: u32,
}

impl DayReport {
    pub fn ship(&self, id: ShipId) -> Option<&ShipReport> {
        self.ships.iter().find(|s| s.ship == id)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeadPassenger {
    pub passenger: PassengerId,
    pub ship:      ShipId,
    pub strength:  u32,
    pub cause:     DeathCause,
}

impl DeadPassenger {
    pub fn new(profile: &PassengerProfile, cause: DeathCause) -> Self {
        Self { passenger: profile.id, ship: profile.ship, strength: profile.strength, cause }
    }
}

/// One ship's schedule and how its roster fared.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShipReport {
    pub ship:                ShipId,
    pub arrival_offset_secs: f64,
    pub roster:              u64,
    pub boarded:             u64,
    pub stranded:            u64,
    pub dead:                u64,
}

impl ShipReport {
    /// `true` when boarded, stranded and dead account for the whole roster.
    pub fn is_balanced(&self) -> bool {
        self.boarded + self.stranded + self.dead == self.roster
    }
}

/// Per-ship tallies in one pass over the ledger, in ship order.
pub(crate) fn ship_reports(ships: &[Ship], entries: &[LedgerEntry]) -> Vec<ShipReport> {
    let mut by_ship: FxHashMap<ShipId, ShipReport> = ships
        .iter()
        .map(|s| {
            let report = ShipReport {
                ship:                s.id,
                arrival_offset_secs: s.arrival_offset_secs,
                roster:              s.roster().len() as u64,
                boarded:             0,
                stranded:            0,
                dead:                0,
            };
            (s.id, report)
        })
        .collect();

    for e in entries {
        if let Some(r) = by_ship.get_mut(&e.profile.ship) {
            match e.outcome {
                Outcome::Boarded  => r.boarded += 1,
                Outcome::Stranded => r.stranded += 1,
                Outcome::Dead(_)  => r.dead += 1,
            }
        }
    }

    let mut reports: Vec<ShipReport> = by_ship.into_values().collect();
    reports.sort_by_key(|r| r.ship);
    reports
}
