//! Unit tests for isle-behavior.

use std::sync::Arc;
use std::time::{Duration, Instant};

use isle_agent::{AgeGroup, Gender, PassengerProfile};
use isle_core::{
    IslandConfig, IslandEvent, IslandObserver, LocationConfig, LocationKind, PassengerId,
    SharedRng, ShipId,
};
use isle_world::ShipSignals;
use parking_lot::Mutex;

use crate::{IslandContext, Passenger};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder(Mutex<Vec<IslandEvent>>);

impl IslandObserver for Recorder {
    fn on_event(&self, event: &IslandEvent) {
        self.0.lock().push(event.clone());
    }
}

impl Recorder {
    fn events(&self) -> Vec<IslandEvent> {
        self.0.lock().clone()
    }

    fn wait_for(&self, what: impl Fn(&IslandEvent) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if self.0.lock().iter().any(&what) {
                return;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        panic!("event never observed");
    }
}

fn config(locations: Vec<LocationConfig>) -> IslandConfig {
    IslandConfig { time_scale: 0.01, locations, ..IslandConfig::default() }
}

fn context(cfg: IslandConfig, recorder: &Arc<Recorder>) -> Arc<IslandContext> {
    Arc::new(IslandContext::new(
        Arc::new(cfg),
        Arc::new(SharedRng::seeded(42)),
        Arc::clone(recorder) as Arc<dyn IslandObserver>,
    ))
}

fn profile(age_group: AgeGroup) -> PassengerProfile {
    PassengerProfile {
        id: PassengerId(1000),
        ship: ShipId(1),
        age_group,
        gender: Gender::Male,
        strength: 60,
    }
}

fn quiet_spot() -> LocationConfig {
    LocationConfig::new("quiet_spot", LocationKind::Other, 100, 0.1, 0.1)
}

// ── Activity choice ───────────────────────────────────────────────────────────

#[cfg(test)]
mod activity_tests {
    use isle_core::{ActivityWeights, LocationId, RandomSource, TimeScale};
    use isle_world::Location;

    use super::*;
    use crate::{activity_weight, choose_activity};

    fn loc(id: u16, kind: LocationKind) -> Location {
        let cfg = LocationConfig::new("x", kind, 1, 1.0, 1.0);
        Location::from_config(LocationId(id), &cfg, &TimeScale::default())
    }

    #[test]
    fn weights_by_kind_and_age() {
        let w = ActivityWeights::default();
        assert_eq!(activity_weight(LocationKind::Bar, AgeGroup::Young, &w), 3);
        assert_eq!(activity_weight(LocationKind::Bar, AgeGroup::Senior, &w), 2);
        assert_eq!(activity_weight(LocationKind::Beach, AgeGroup::Adult, &w), 3);
        assert_eq!(activity_weight(LocationKind::Hiking, AgeGroup::Young, &w), 1);
    }

    #[test]
    fn zero_weight_kinds_are_never_chosen() {
        let weights = ActivityWeights { bar_young: 0, bar_other: 0, beach: 1, other: 0 };
        let locations = [loc(0, LocationKind::Bar), loc(1, LocationKind::Beach), loc(2, LocationKind::Shopping)];
        let rng = SharedRng::seeded(3);
        for _ in 0..200 {
            let picked = choose_activity(&locations, AgeGroup::Young, &weights, &rng).unwrap();
            assert_eq!(picked.id, LocationId(1));
        }
    }

    #[test]
    fn all_zero_weights_choose_nothing() {
        let weights = ActivityWeights { bar_young: 0, bar_other: 0, beach: 0, other: 0 };
        let locations = [loc(0, LocationKind::Other)];
        let rng: &dyn RandomSource = &SharedRng::seeded(3);
        assert!(choose_activity(&locations, AgeGroup::Adult, &weights, rng).is_none());
        assert!(choose_activity(&[], AgeGroup::Adult, &ActivityWeights::default(), rng).is_none());
    }

    #[test]
    fn young_prefer_bars() {
        let w = ActivityWeights::default();
        let locations = [loc(0, LocationKind::Bar), loc(1, LocationKind::Other)];
        let rng = SharedRng::seeded(17);
        let bar_hits = (0..20_000)
            .filter(|_| choose_activity(&locations, AgeGroup::Young, &w, &rng).unwrap().id == LocationId(0))
            .count();
        let share = bar_hits as f64 / 20_000.0;
        assert!((share - 0.75).abs() < 0.02, "bar share {share}");
    }
}

// ── Hazard and incident rolls ─────────────────────────────────────────────────

#[cfg(test)]
mod incident_tests {
    use isle_core::{DeathCause, DelayRange, IncidentKind, LocationId, TimeScale};
    use isle_world::Location;

    use super::*;
    use crate::{roll_hazard, roll_incident};

    fn location(cfg: LocationConfig) -> Location {
        Location::from_config(LocationId(0), &cfg, &TimeScale::default())
    }

    #[test]
    fn no_hazard_never_kills() {
        let loc = location(quiet_spot());
        let rng = SharedRng::seeded(0);
        assert!((0..100).all(|_| roll_hazard(&loc, &rng).is_none()));
        assert!((0..100).all(|_| roll_incident(&loc, &rng).is_none()));
    }

    #[test]
    fn certain_hazard_always_kills() {
        let loc = location(quiet_spot().with_hazard(DeathCause::Shark, 1.0));
        let rng = SharedRng::seeded(0);
        assert!((0..100).all(|_| roll_hazard(&loc, &rng) == Some(DeathCause::Shark)));
    }

    #[test]
    fn incident_delay_within_range() {
        let loc = location(quiet_spot().with_incident(IncidentKind::FellAsleep, 1.0, DelayRange::new(2.0, 4.0)));
        let rng = SharedRng::seeded(8);
        for _ in 0..500 {
            let (kind, delay) = roll_incident(&loc, &rng).unwrap();
            assert_eq!(kind, IncidentKind::FellAsleep);
            assert!((2.0..=4.0).contains(&delay), "delay {delay}");
        }
    }
}

// ── Passenger lifecycle ───────────────────────────────────────────────────────

#[cfg(test)]
mod passenger_tests {
    use isle_core::{DeathCause, DelayRange, IncidentKind, Outcome, PassengerState};

    use super::*;

    #[test]
    fn boards_when_back_before_departure() {
        let recorder = Arc::new(Recorder::default());
        let ctx = context(config(vec![quiet_spot()]), &recorder);
        let signals = Arc::new(ShipSignals::new());

        let handle = Passenger::new(profile(AgeGroup::Adult), Arc::clone(&signals), Arc::clone(&ctx))
            .spawn()
            .unwrap();
        signals.arrived.fire();
        recorder.wait_for(|e| matches!(e, IslandEvent::LocationEntered { .. }));
        signals.last_call.fire();

        assert_eq!(handle.join().unwrap(), Outcome::Boarded);
        signals.departed.fire();

        let snap = ctx.stats.snapshot();
        assert_eq!(snap.boarded, 1);
        assert_eq!(snap.stranded, 0);
        assert_eq!(snap.total_deaths(), 0);
        assert_eq!(ctx.ledger.boarded().len(), 1);

        let boarded_at = ctx.ledger.entries()[0].decided_at;
        assert!(boarded_at < signals.departed.fired_at().unwrap());
        assert_eq!(ctx.locations[0].occupancy(), 0);
    }

    #[test]
    fn stranded_when_ship_already_gone() {
        let recorder = Arc::new(Recorder::default());
        let ctx = context(config(vec![quiet_spot()]), &recorder);
        let signals = Arc::new(ShipSignals::new());
        signals.arrived.fire();
        signals.last_call.fire();
        signals.departed.fire();

        let outcome = Passenger::new(profile(AgeGroup::Young), signals, Arc::clone(&ctx)).run();

        assert_eq!(outcome, Outcome::Stranded);
        assert_eq!(ctx.stats.snapshot().stranded, 1);
        let stranded = ctx.ledger.stranded();
        assert_eq!(stranded.len(), 1);
        assert_eq!(stranded[0].id, PassengerId(1000));
        assert_eq!(ctx.ledger.len(), 1);
    }

    #[test]
    fn fatal_stay_releases_the_slot() {
        let recorder = Arc::new(Recorder::default());
        let cliff = LocationConfig::new("cliff_walk", LocationKind::Hiking, 1, 0.1, 0.1)
            .with_hazard(DeathCause::Cliff, 1.0);
        let ctx = context(config(vec![cliff]), &recorder);
        let signals = Arc::new(ShipSignals::new());
        signals.arrived.fire();

        let outcome = Passenger::new(profile(AgeGroup::Senior), signals, Arc::clone(&ctx)).run();

        assert_eq!(outcome, Outcome::Dead(DeathCause::Cliff));
        let snap = ctx.stats.snapshot();
        assert_eq!(snap.deaths_by(DeathCause::Cliff), 1);
        assert_eq!(snap.boarded + snap.stranded, 0);
        assert_eq!(ctx.ledger.dead().len(), 1);
        assert_eq!(ctx.locations[0].occupancy(), 0);

        let events = recorder.events();
        assert!(events.iter().any(|e| matches!(e, IslandEvent::LocationLeft { occupancy: 0, .. })));
        assert!(matches!(
            events.last(),
            Some(IslandEvent::PassengerState { state: PassengerState::Dead, .. })
        ));
    }

    #[test]
    fn drunk_passenger_can_react_late() {
        let recorder = Arc::new(Recorder::default());
        let bar = LocationConfig::new("harbour_bar", LocationKind::Bar, 10, 0.1, 0.1)
            .with_incident(IncidentKind::Drunk, 1.0, DelayRange::new(0.1, 0.2));
        let mut cfg = config(vec![bar]);
        cfg.return_trip.drunk_delay_probability = 1.0;
        cfg.return_trip.drunk_delay = DelayRange::new(0.1, 0.2);
        let ctx = context(cfg, &recorder);
        let signals = Arc::new(ShipSignals::new());

        let handle = Passenger::new(profile(AgeGroup::Young), Arc::clone(&signals), Arc::clone(&ctx))
            .spawn()
            .unwrap();
        signals.arrived.fire();
        recorder.wait_for(|e| matches!(e, IslandEvent::Incident { kind: IncidentKind::Drunk, .. }));
        signals.last_call.fire();

        assert_eq!(handle.join().unwrap(), Outcome::Boarded);
        assert!(ctx.stats.snapshot().incidents_of(IncidentKind::Drunk) >= 1);
        assert!(recorder.events().iter().any(|e| matches!(e, IslandEvent::DrunkReaction { .. })));
    }

    #[test]
    fn sober_passenger_never_reacts_late() {
        let recorder = Arc::new(Recorder::default());
        let mut cfg = config(vec![quiet_spot()]);
        cfg.return_trip.drunk_delay_probability = 1.0;
        let ctx = context(cfg, &recorder);
        let signals = Arc::new(ShipSignals::new());
        signals.arrived.fire();
        signals.last_call.fire();

        Passenger::new(profile(AgeGroup::Adult), signals, ctx).run();
        assert!(!recorder.events().iter().any(|e| matches!(e, IslandEvent::DrunkReaction { .. })));
    }

    #[test]
    fn states_follow_the_lifecycle() {
        let recorder = Arc::new(Recorder::default());
        let ctx = context(config(vec![quiet_spot()]), &recorder);
        let signals = Arc::new(ShipSignals::new());

        let handle = Passenger::new(profile(AgeGroup::Adult), Arc::clone(&signals), ctx).spawn().unwrap();
        signals.arrived.fire();
        recorder.wait_for(|e| matches!(e, IslandEvent::LocationLeft { .. }));
        signals.last_call.fire();
        handle.join().unwrap();

        let states: Vec<_> = recorder
            .events()
            .into_iter()
            .filter_map(|e| match e {
                IslandEvent::PassengerState { state, .. } => Some(state),
                _ => None,
            })
            .collect();
        assert_eq!(states.first(), Some(&PassengerState::WaitingForArrival));
        assert_eq!(states.get(1), Some(&PassengerState::Ashore));
        assert!(states.contains(&PassengerState::AtActivity));
        let n = states.len();
        assert_eq!(&states[n - 2..], &[PassengerState::Returning, PassengerState::Boarded]);
    }
}
