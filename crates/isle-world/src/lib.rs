//! `isle-world` — everything passengers share.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`signal`]    | `Signal` — one-shot broadcast with happens-before semantics    |
//! | [`location`]  | `Location`, `Occupancy` (RAII capacity slot), `LocationUsage`  |
//! | [`ship`]      | `Ship`, `ShipSignals` — the arrival/last-call/departure timer  |
//! | [`stats`]     | `Stats` (atomic counters), `StatsSnapshot`                     |
//! | [`ledger`]    | `OutcomeLedger` — the stranded/dead/boarded registries         |
//!
//! # Synchronization summary
//!
//! | State                 | Primitive                               | Held across a wait? |
//! |-----------------------|-----------------------------------------|---------------------|
//! | Ship signals          | `parking_lot::Mutex<Option<Instant>>` + `Condvar` | no         |
//! | Location occupancy    | `AtomicU32` compare-and-swap with bound | no                  |
//! | Stats counters        | independent `AtomicU64`s                | no                  |
//! | Outcome registries    | `parking_lot::Mutex<Vec<_>>`, append-only | no                |

pub mod ledger;
pub mod location;
pub mod ship;
pub mod signal;
pub mod stats;

#[cfg(test)]
mod tests;

pub use ledger::{LedgerEntry, OutcomeLedger};
pub use location::{Location, LocationUsage, Occupancy};
pub use ship::{Ship, ShipSignals};
pub use signal::Signal;
pub use stats::{Stats, StatsSnapshot};
