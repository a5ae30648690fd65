//! Unit tests for shared island state.

#[cfg(test)]
mod helpers {
    use isle_agent::{AgeGroup, Gender, PassengerProfile};
    use isle_core::{LocationId, LocationKind, PassengerId, ShipId};

    use crate::Location;

    pub fn location(capacity: u32) -> Location {
        Location::new(LocationId(0), "test_spot", LocationKind::Other, capacity, 1.0, 1.0)
    }

    pub fn profile(id: u32, ship: u16) -> PassengerProfile {
        PassengerProfile {
            id:        PassengerId(id),
            ship:      ShipId(ship),
            age_group: AgeGroup::Adult,
            gender:    Gender::Female,
            strength:  50,
        }
    }
}

// ── Signal ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod signal_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::Signal;

    #[test]
    fn fires_once() {
        let s = Signal::new();
        assert!(!s.is_set());
        assert!(s.fire());
        assert!(!s.fire(), "second fire is a no-op");
        assert!(s.is_set());
    }

    #[test]
    fn fired_at_is_stable() {
        let s = Signal::new();
        assert_eq!(s.fired_at(), None);
        s.fire();
        let first = s.fired_at().unwrap();
        thread::sleep(Duration::from_millis(2));
        s.fire();
        assert_eq!(s.fired_at(), Some(first));
    }

    #[test]
    fn wait_timeout_expires_when_unset() {
        let s = Signal::new();
        let start = Instant::now();
        assert!(!s.wait_timeout(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn wait_timeout_returns_immediately_when_set() {
        let s = Signal::new();
        s.fire();
        let start = Instant::now();
        assert!(s.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn fire_wakes_every_waiter() {
        let s = Arc::new(Signal::new());
        let waiters: Vec<_> = (0..8)
            .map(|_| {
                let s = Arc::clone(&s);
                thread::spawn(move || s.wait_timeout(Duration::from_secs(10)))
            })
            .collect();
        thread::sleep(Duration::from_millis(20));
        s.fire();
        for w in waiters {
            assert!(w.join().unwrap());
        }
    }

    #[test]
    fn dwell_is_cut_short_by_fire() {
        let s = Arc::new(Signal::new());
        let firer = {
            let s = Arc::clone(&s);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                s.fire();
            })
        };
        let start = Instant::now();
        assert!(s.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
        firer.join().unwrap();
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod location_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;
    use std::time::Duration;

    use isle_core::{LocationConfig, LocationId, LocationKind, PassengerId, TimeScale};

    use super::helpers::location;
    use crate::Location;

    #[test]
    fn rejects_when_full() {
        let loc = location(2);
        let a = loc.try_enter(PassengerId(1)).unwrap();
        let b = loc.try_enter(PassengerId(2)).unwrap();
        assert_eq!(b.occupancy_on_entry(), 2);
        assert!(loc.try_enter(PassengerId(3)).is_none());
        assert_eq!(loc.occupancy(), 2);

        assert_eq!(a.leave(), 1);
        assert!(loc.try_enter(PassengerId(3)).is_some());
        drop(b);
        assert_eq!(loc.occupancy(), 0);
    }

    #[test]
    fn drop_releases_slot() {
        let loc = location(1);
        {
            let _held = loc.try_enter(PassengerId(1)).unwrap();
            assert_eq!(loc.occupancy(), 1);
        }
        assert_eq!(loc.occupancy(), 0);
    }

    #[test]
    fn usage_counts_visits_rejections_and_peak() {
        let loc = location(2);
        let a = loc.try_enter(PassengerId(1)).unwrap();
        let b = loc.try_enter(PassengerId(2)).unwrap();
        assert!(loc.try_enter(PassengerId(3)).is_none());
        assert!(loc.try_enter(PassengerId(4)).is_none());
        a.leave();
        b.leave();
        let c = loc.try_enter(PassengerId(3)).unwrap();
        c.leave();

        let usage = loc.usage();
        assert_eq!(usage.visits, 3);
        assert_eq!(usage.rejections, 2);
        assert_eq!(usage.peak, 2);
        assert_eq!(usage.occupancy, 0);
    }

    #[test]
    fn from_config_scales_hours() {
        let cfg = LocationConfig::new("pier_cafe", LocationKind::Restaurant, 4, 1.5, 0.7);
        let loc = Location::from_config(LocationId(3), &cfg, &TimeScale::default());
        assert_eq!(loc.base_duration_secs, 7.5);
        assert_eq!(loc.capacity, 4);
        assert_eq!(loc.id, LocationId(3));
        assert!(loc.hazard.is_none());
    }

    #[test]
    fn occupancy_never_exceeds_capacity_under_contention() {
        const CAPACITY: u32 = 3;
        let loc = Arc::new(location(CAPACITY));
        let observed_max = Arc::new(AtomicU32::new(0));

        let workers: Vec<_> = (0..16)
            .map(|i| {
                let loc = Arc::clone(&loc);
                let observed_max = Arc::clone(&observed_max);
                thread::spawn(move || {
                    for _ in 0..200 {
                        if let Some(slot) = loc.try_enter(PassengerId(i)) {
                            let now = loc.occupancy();
                            observed_max.fetch_max(now, Ordering::Relaxed);
                            assert!(now <= CAPACITY, "occupancy {now} over capacity");
                            thread::sleep(Duration::from_micros(50));
                            slot.leave();
                        }
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        assert!(observed_max.load(Ordering::Relaxed) <= CAPACITY);
        assert!(loc.usage().peak <= CAPACITY);
        assert_eq!(loc.occupancy(), 0);
    }

    #[test]
    fn slot_released_when_holder_panics() {
        let loc = Arc::new(location(1));
        let holder = {
            let loc = Arc::clone(&loc);
            thread::spawn(move || {
                let _slot = loc.try_enter(PassengerId(1)).unwrap();
                panic!("holder died while inside");
            })
        };
        assert!(holder.join().is_err());
        assert_eq!(loc.occupancy(), 0);
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ship_tests {
    use std::sync::Arc;

    use isle_core::{NoopObserver, PassengerId, ShipId, ShipSignalKind, TimeScale};

    use crate::Ship;

    fn fast() -> TimeScale {
        TimeScale::new(5.0, 0.001)
    }

    #[test]
    fn signals_fire_in_order() {
        let ship = Ship::new(ShipId(1), 2.0, 40.0, 2.5);
        let signals = ship.signals();
        ship.run(fast(), &NoopObserver);

        let arrived = signals.arrived.fired_at().unwrap();
        let last_call = signals.last_call.fired_at().unwrap();
        let departed = signals.departed.fired_at().unwrap();
        assert!(arrived <= last_call);
        assert!(last_call <= departed);
    }

    #[test]
    fn spawn_returns_ship_with_roster() {
        let mut ship = Ship::new(ShipId(2), 0.0, 10.0, 1.0);
        ship.attach(PassengerId(2000));
        ship.attach(PassengerId(2001));
        let signals = ship.signals();

        let handle = ship.spawn(fast(), Arc::new(NoopObserver)).unwrap();
        signals.departed.wait();
        let ship = handle.join().unwrap();
        assert_eq!(ship.roster(), &[PassengerId(2000), PassengerId(2001)]);
        assert!(signals.get(ShipSignalKind::LastCall).is_set());
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use std::thread;

    use isle_core::{DeathCause, IncidentKind};

    use crate::Stats;

    #[test]
    fn snapshot_lists_every_category() {
        let snap = Stats::new().snapshot();
        assert_eq!(snap.deaths.len(), DeathCause::COUNT);
        assert_eq!(snap.incidents.len(), IncidentKind::COUNT);
        assert_eq!(snap.total_deaths(), 0);
        assert!(snap.is_balanced());
    }

    #[test]
    fn counters_are_independent() {
        let stats = Stats::new();
        for _ in 0..3 {
            stats.record_passenger();
        }
        stats.record_boarded();
        stats.record_stranded();
        stats.record_death(DeathCause::Shark);
        stats.record_incident(IncidentKind::Drunk);
        stats.record_incident(IncidentKind::Drunk);

        let snap = stats.snapshot();
        assert_eq!(snap.total_passengers, 3);
        assert_eq!(snap.deaths_by(DeathCause::Shark), 1);
        assert_eq!(snap.deaths_by(DeathCause::Cliff), 0);
        assert_eq!(snap.incidents_of(IncidentKind::Drunk), 2);
        assert_eq!(snap.total_incidents(), 2);
        assert!(snap.is_balanced());
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let stats = Arc::new(Stats::new());
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        stats.record_incident(IncidentKind::FellAsleep);
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(stats.snapshot().incidents_of(IncidentKind::FellAsleep), 8_000);
    }
}

// ── Ledger ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger_tests {
    use std::time::Instant;

    use isle_core::{DeathCause, Outcome};

    use super::helpers::profile;
    use crate::OutcomeLedger;

    #[test]
    fn registries_partition_entries() {
        let ledger = OutcomeLedger::new();
        let now = Instant::now();
        ledger.record(profile(1000, 1), Outcome::Boarded, now);
        ledger.record(profile(1001, 1), Outcome::Stranded, now);
        ledger.record(profile(1002, 1), Outcome::Dead(DeathCause::Cliff), now);
        ledger.record(profile(2000, 2), Outcome::Stranded, now);

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.boarded().len(), 1);
        assert_eq!(ledger.stranded().len(), 2);
        let dead = ledger.dead();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].1, DeathCause::Cliff);
    }
}
