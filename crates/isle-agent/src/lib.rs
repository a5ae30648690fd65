//! `isle-agent` — who the passengers are.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`profile`]   | `PassengerProfile`, `AgeGroup`, `Gender`                 |
//! | [`builder`]   | `RosterBuilder` (one ship's passengers, drawn at boarding) |
//!
//! A profile is fixed at creation and never mutated; the lifecycle state of
//! a passenger lives in `isle-behavior`.

pub mod builder;
pub mod profile;

#[cfg(test)]
mod tests;

pub use builder::RosterBuilder;
pub use profile::{AgeGroup, Gender, PassengerProfile};
