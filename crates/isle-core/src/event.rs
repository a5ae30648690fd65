//! Structured events emitted by the engine, and the observer that receives
//! them.
//!
//! The engine never formats text.  Every noteworthy step (ship signals,
//! location entries, incidents, tournament matches) becomes an
//! [`IslandEvent`] handed to the injected [`IslandObserver`].  Rendering
//! (log lines, recorded traces, metrics) is the observer's business.

use serde::Serialize;

use crate::{
    AmbientKind, DeathCause, IncidentKind, LocationId, PassengerId, PassengerState, ShipId,
    ShipSignalKind, TransportMode,
};

/// One tournament match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// 1-based match number within the tournament.
    pub round:      u32,
    pub a:          PassengerId,
    pub a_strength: u32,
    pub b:          PassengerId,
    pub b_strength: u32,
    pub winner:     PassengerId,
}

/// Everything the engine reports while a day runs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IslandEvent {
    DayStarted { ships: u16, passengers_per_ship: u32 },

    ShipScheduled { ship: ShipId, arrival_offset_secs: f64 },
    ShipSignal { ship: ShipId, signal: ShipSignalKind },

    PassengerState { passenger: PassengerId, ship: ShipId, state: PassengerState },

    Travel {
        passenger:   PassengerId,
        location:    LocationId,
        mode:        TransportMode,
        travel_secs: f64,
    },
    LocationEntered { passenger: PassengerId, location: LocationId, occupancy: u32, capacity: u32 },
    LocationFull { passenger: PassengerId, location: LocationId, capacity: u32 },
    LocationLeft { passenger: PassengerId, location: LocationId, occupancy: u32, capacity: u32 },

    Incident {
        passenger:  PassengerId,
        location:   LocationId,
        kind:       IncidentKind,
        delay_secs: f64,
    },
    Death { passenger: PassengerId, location: LocationId, cause: DeathCause },

    DrunkReaction { passenger: PassengerId, delay_secs: f64 },
    ReturnTrip { passenger: PassengerId, mode: TransportMode, travel_secs: f64 },

    AmbientStarted { kind: AmbientKind, detail: Option<TransportMode> },
    AmbientEnded { kind: AmbientKind, detail: Option<TransportMode> },

    TournamentStarted { combatants: usize },
    Match(MatchRecord),
    TournamentEnded { survivor: Option<PassengerId> },

    DayEnded,
}

/// Receives every [`IslandEvent`].
///
/// Observers are shared by all worker threads, so they must be `Send +
/// Sync` and take `&self`.  Use interior mutability for any state.
///
/// The default method does nothing, so an implementor only overrides what
/// it cares about.
///
/// # Example — count deaths
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use isle_core::{IslandEvent, IslandObserver};
///
/// #[derive(Default)]
/// struct DeathCounter(AtomicUsize);
///
/// impl IslandObserver for DeathCounter {
///     fn on_event(&self, event: &IslandEvent) {
///         if matches!(event, IslandEvent::Death { .. }) {
///             self.0.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
/// ```
pub trait IslandObserver: Send + Sync {
    fn on_event(&self, _event: &IslandEvent) {}
}

/// An [`IslandObserver`] that ignores everything.
pub struct NoopObserver;

impl IslandObserver for NoopObserver {}
