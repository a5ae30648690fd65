//! `isle-behavior` — what a passenger does all day.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`context`]    | `IslandContext` — shared handles every passenger thread reads |
//! | [`activity`]   | weighted activity choice                                      |
//! | [`incident`]   | hazard (fatal) and incident (delay) rolls after a stay        |
//! | [`passenger`]  | `Passenger` — the lifecycle state machine, one per thread     |
//!
//! # Design notes
//!
//! A passenger runs straight-line blocking code on its own thread.  It
//! suspends only on ship signals, on travel and incident sleeps, and on the
//! dwell wait, which returns early the moment `last_call` fires.  It never
//! holds a lock across any of those suspensions; the only thing held across
//! a dwell is its location `Occupancy` guard, which releases the slot on
//! every exit path.

pub mod activity;
pub mod context;
pub mod incident;
pub mod passenger;

#[cfg(test)]
mod tests;

pub use activity::{activity_weight, choose_activity};
pub use context::IslandContext;
pub use incident::{roll_hazard, roll_incident};
pub use passenger::Passenger;
