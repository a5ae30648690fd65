//! Ready-made [`IslandObserver`]s.
//!
//! | Observer             | Use                                                |
//! |----------------------|----------------------------------------------------|
//! | `TracingObserver`    | structured log lines through `tracing`             |
//! | `RecordingObserver`  | keeps every event in memory, for tests and traces  |
//! | `isle_core::NoopObserver` | discards everything                           |

use isle_core::{IslandEvent, IslandObserver, PassengerState};
use parking_lot::Mutex;
use tracing::{debug, info, trace};

/// Renders events as `tracing` records.
///
/// Ship signals, deaths, strandings, incidents, ambient events and the
/// tournament log at `info`; travel, location entry/exit and other state
/// changes at `debug`; capacity rejections at `trace`.
pub struct TracingObserver;

impl IslandObserver for TracingObserver {
    fn on_event(&self, event: &IslandEvent) {
        match event {
            IslandEvent::DayStarted { ships, passengers_per_ship } => {
                info!(ships, passengers_per_ship, "island day started");
            }
            IslandEvent::ShipScheduled { ship, arrival_offset_secs } => {
                info!(%ship, arrival_offset_secs, "ship scheduled");
            }
            IslandEvent::ShipSignal { ship, signal } => {
                info!(%ship, %signal, "ship signal");
            }
            IslandEvent::PassengerState { passenger, ship, state } => match state {
                PassengerState::Stranded => info!(%passenger, %ship, "passenger stranded"),
                PassengerState::Boarded => debug!(%passenger, %ship, "passenger boarded"),
                _ => debug!(%passenger, %ship, %state, "passenger state"),
            },
            IslandEvent::Travel { passenger, location, mode, travel_secs } => {
                debug!(%passenger, %location, %mode, travel_secs, "travelling");
            }
            IslandEvent::LocationEntered { passenger, location, occupancy, capacity } => {
                debug!(%passenger, %location, occupancy, capacity, "entered location");
            }
            IslandEvent::LocationFull { passenger, location, capacity } => {
                trace!(%passenger, %location, capacity, "location full");
            }
            IslandEvent::LocationLeft { passenger, location, occupancy, capacity } => {
                debug!(%passenger, %location, occupancy, capacity, "left location");
            }
            IslandEvent::Incident { passenger, location, kind, delay_secs } => {
                info!(%passenger, %location, %kind, delay_secs, "incident");
            }
            IslandEvent::Death { passenger, location, cause } => {
                info!(%passenger, %location, %cause, "passenger died");
            }
            IslandEvent::DrunkReaction { passenger, delay_secs } => {
                info!(%passenger, delay_secs, "drunk passenger reacted late");
            }
            IslandEvent::ReturnTrip { passenger, mode, travel_secs } => {
                debug!(%passenger, %mode, travel_secs, "returning to ship");
            }
            IslandEvent::AmbientStarted { kind, detail } => match detail {
                Some(mode) => info!(%kind, %mode, "ambient event started"),
                None => info!(%kind, "ambient event started"),
            },
            IslandEvent::AmbientEnded { kind, .. } => {
                info!(%kind, "ambient event ended");
            }
            IslandEvent::TournamentStarted { combatants } => {
                info!(combatants, "tournament started");
            }
            IslandEvent::Match(m) => {
                info!(
                    round = m.round,
                    a = %m.a,
                    a_strength = m.a_strength,
                    b = %m.b,
                    b_strength = m.b_strength,
                    winner = %m.winner,
                    "match"
                );
            }
            IslandEvent::TournamentEnded { survivor: Some(survivor) } => {
                info!(%survivor, "tournament survivor");
            }
            IslandEvent::TournamentEnded { survivor: None } => {
                info!("no stranded passengers; no tournament survivor");
            }
            IslandEvent::DayEnded => info!("island day ended"),
        }
    }
}

/// Keeps every event in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<IslandEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event seen so far.
    pub fn events(&self) -> Vec<IslandEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&IslandEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }

    /// Position of the first matching event.
    pub fn position(&self, pred: impl Fn(&IslandEvent) -> bool) -> Option<usize> {
        self.events.lock().iter().position(pred)
    }
}

impl IslandObserver for RecordingObserver {
    fn on_event(&self, event: &IslandEvent) {
        self.events.lock().push(event.clone());
    }
}
