//! The passenger state machine.
//!
//! ```text
//! WaitingForArrival ──arrived──▶ Ashore
//!        ┌────────────────────────────┘
//!        ▼
//!   EnRouteToActivity ──enter──▶ AtActivity ──leave──┐
//!        ▲   │ (full)                 │ hazard       │
//!        └───┴────────────────────────┼──────────────┘   until last_call
//!                                     ▼
//!                                   Dead
//!
//! last_call ──▶ Returning ──▶ Boarded   (departed unset when checked)
//!                         └─▶ Stranded  (departed already set)
//! ```
//!
//! The ashore loop re-checks `last_call` at every iteration boundary, and
//! the dwell wait wakes as soon as it fires, so the only non-preemptible
//! suspensions are travel and incident delays.  A passenger turned away
//! from a full location waits `full_retry_secs` (or until last call) before
//! choosing again, so every pass of the loop suspends at least once.  After last call every
//! surviving passenger makes exactly one return trip and reads `departed`
//! exactly once; that single read fixes the outcome.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use isle_agent::PassengerProfile;
use isle_core::{DeathCause, IslandEvent, Outcome, PassengerState, TransportMode};
use isle_world::ShipSignals;

use crate::{IslandContext, choose_activity, roll_hazard, roll_incident};

pub struct Passenger {
    profile:   PassengerProfile,
    state:     PassengerState,
    /// Set once the passenger got drunk; enables the drunk reaction delay.
    was_drunk: bool,
    signals:   Arc<ShipSignals>,
    ctx:       Arc<IslandContext>,
}

impl Passenger {
    pub fn new(profile: PassengerProfile, signals: Arc<ShipSignals>, ctx: Arc<IslandContext>) -> Self {
        Self {
            profile,
            state: PassengerState::WaitingForArrival,
            was_drunk: false,
            signals,
            ctx,
        }
    }

    pub fn profile(&self) -> &PassengerProfile {
        &self.profile
    }

    pub fn state(&self) -> PassengerState {
        self.state
    }

    /// Live the whole day on the calling thread and return its outcome.
    ///
    /// The outcome is recorded in `stats` and the ledger exactly once,
    /// before this returns.
    pub fn run(mut self) -> Outcome {
        let ctx = Arc::clone(&self.ctx);

        self.announce(&ctx);
        self.signals.arrived.wait();
        self.transition(&ctx, PassengerState::Ashore);

        while !self.signals.last_call.is_set() {
            if let Some(cause) = self.excursion(&ctx) {
                return self.finish(&ctx, Outcome::Dead(cause), Instant::now());
            }
        }

        self.return_trip(&ctx)
    }

    /// Move onto a named thread.
    pub fn spawn(self) -> io::Result<JoinHandle<Outcome>> {
        thread::Builder::new()
            .name(format!("passenger-{}", self.profile.id))
            .spawn(move || self.run())
    }

    // ── Ashore loop ───────────────────────────────────────────────────────

    /// One choose → travel → enter → dwell → roll → leave pass.  Returns the
    /// cause of death if the passenger did not survive it.
    fn excursion(&mut self, ctx: &IslandContext) -> Option<DeathCause> {
        let rng = ctx.rng.as_ref();
        let Some(location) =
            choose_activity(&ctx.locations, self.profile.age_group, &ctx.config.weights, rng)
        else {
            // Every weight is zero: nothing to do but wait for last call.
            self.signals.last_call.wait();
            return None;
        };

        self.transition(ctx, PassengerState::EnRouteToActivity);
        let mode = TransportMode::ALL[rng.index(TransportMode::ALL.len()).unwrap_or(0)];
        let travel_secs = ctx.config.transport.travel_time(mode, location.distance);
        ctx.emit(IslandEvent::Travel {
            passenger: self.profile.id,
            location: location.id,
            mode,
            travel_secs,
        });
        ctx.time.sleep(travel_secs);

        let Some(slot) = location.try_enter(self.profile.id) else {
            ctx.emit(IslandEvent::LocationFull {
                passenger: self.profile.id,
                location:  location.id,
                capacity:  location.capacity,
            });
            self.signals.last_call.wait_timeout(ctx.time.real(ctx.config.full_retry_secs));
            return None;
        };
        ctx.emit(IslandEvent::LocationEntered {
            passenger: self.profile.id,
            location:  location.id,
            occupancy: slot.occupancy_on_entry(),
            capacity:  location.capacity,
        });
        self.transition(ctx, PassengerState::AtActivity);

        self.signals.last_call.wait_timeout(ctx.time.real(location.base_duration_secs));

        if let Some(cause) = roll_hazard(location, rng) {
            let occupancy = slot.leave();
            ctx.emit(IslandEvent::Death { passenger: self.profile.id, location: location.id, cause });
            ctx.emit(IslandEvent::LocationLeft {
                passenger: self.profile.id,
                location: location.id,
                occupancy,
                capacity: location.capacity,
            });
            return Some(cause);
        }

        if let Some((kind, delay_secs)) = roll_incident(location, rng) {
            ctx.stats.record_incident(kind);
            ctx.emit(IslandEvent::Incident {
                passenger: self.profile.id,
                location: location.id,
                kind,
                delay_secs,
            });
            ctx.time.sleep(delay_secs);
            self.was_drunk |= kind.inebriates();
        }

        let occupancy = slot.leave();
        ctx.emit(IslandEvent::LocationLeft {
            passenger: self.profile.id,
            location: location.id,
            occupancy,
            capacity: location.capacity,
        });
        None
    }

    // ── After last call ───────────────────────────────────────────────────

    fn return_trip(mut self, ctx: &IslandContext) -> Outcome {
        self.transition(ctx, PassengerState::Returning);
        let trip = &ctx.config.return_trip;

        if self.was_drunk && ctx.rng.chance(trip.drunk_delay_probability) {
            let delay_secs = ctx.rng.uniform(trip.drunk_delay.min, trip.drunk_delay.max);
            ctx.emit(IslandEvent::DrunkReaction { passenger: self.profile.id, delay_secs });
            ctx.time.sleep(delay_secs);
        }

        let travel_secs = ctx.config.transport.travel_time(trip.mode, trip.distance);
        ctx.emit(IslandEvent::ReturnTrip { passenger: self.profile.id, mode: trip.mode, travel_secs });
        ctx.time.sleep(travel_secs);

        // Taken before the read: a boarder's timestamp always precedes
        // the departure instant.
        let checked_at = Instant::now();
        let outcome = if self.signals.departed.is_set() { Outcome::Stranded } else { Outcome::Boarded };
        self.finish(ctx, outcome, checked_at)
    }

    fn finish(mut self, ctx: &IslandContext, outcome: Outcome, decided_at: Instant) -> Outcome {
        match outcome {
            Outcome::Boarded     => ctx.stats.record_boarded(),
            Outcome::Stranded    => ctx.stats.record_stranded(),
            Outcome::Dead(cause) => ctx.stats.record_death(cause),
        }
        ctx.ledger.record(self.profile, outcome, decided_at);
        self.transition(ctx, outcome.state());
        outcome
    }

    // ── State reporting ───────────────────────────────────────────────────

    fn announce(&self, ctx: &IslandContext) {
        ctx.emit(IslandEvent::PassengerState {
            passenger: self.profile.id,
            ship:      self.profile.ship,
            state:     self.state,
        });
    }

    fn transition(&mut self, ctx: &IslandContext, next: PassengerState) {
        if self.state != next {
            self.state = next;
            self.announce(ctx);
        }
    }
}
