//! `isle-core` — foundational types for the cruise-island day simulation.
//!
//! This crate is a dependency of every other `isle-*` crate.  It has no
//! `isle-*` dependencies and holds only plain data, pure functions and the
//! seams (random source, event observer) the concurrent engine is built on.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ShipId`, `LocationId`                     |
//! | [`rng`]         | `RandomSource` trait, `SharedRng`, `shuffle`              |
//! | [`time`]        | `TimeScale` (simulated seconds → real `Duration`)         |
//! | [`transport`]   | `TransportMode`, `TransportSpeeds`                        |
//! | [`catalog`]     | `LocationKind`, `IncidentKind`, `DeathCause`, `AmbientKind` |
//! | [`lifecycle`]   | `PassengerState`, `Outcome`, `ShipSignalKind`             |
//! | [`event`]       | `IslandEvent`, `MatchRecord`, `IslandObserver`            |
//! | [`config`]      | `IslandConfig` and its sections (TOML-loadable)           |
//! | [`error`]       | `IsleError`, `IsleResult`                                 |

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod lifecycle;
pub mod rng;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{AmbientKind, DeathCause, IncidentKind, LocationKind};
pub use config::{
    ActivityWeights, AmbientConfig, DelayRange, HazardConfig, IncidentConfig, IslandConfig,
    LocationConfig, ReturnTripConfig, ShipConfig, TournamentConfig,
};
pub use error::{IsleError, IsleResult};
pub use event::{IslandEvent, IslandObserver, MatchRecord, NoopObserver};
pub use ids::{LocationId, PassengerId, ShipId};
pub use lifecycle::{Outcome, PassengerState, ShipSignalKind};
pub use rng::{RandomSource, SharedRng, shuffle};
pub use time::TimeScale;
pub use transport::{TransportMode, TransportSpeeds};
