//! Passenger lifecycle states, terminal outcomes and ship signal names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DeathCause;

/// Where a passenger is in its day.
///
/// ```text
/// WaitingForArrival → Ashore → { EnRoute ⇄ AtActivity } → Returning
///                                                    → { Boarded | Stranded }
///                    (AtActivity → Dead on a fatal event)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerState {
    WaitingForArrival,
    Ashore,
    EnRouteToActivity,
    AtActivity,
    Returning,
    Boarded,
    Stranded,
    Dead,
}

impl PassengerState {
    /// `true` for the three terminal states.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PassengerState::Boarded | PassengerState::Stranded | PassengerState::Dead)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassengerState::WaitingForArrival => "waiting_for_arrival",
            PassengerState::Ashore            => "ashore",
            PassengerState::EnRouteToActivity => "en_route",
            PassengerState::AtActivity        => "at_activity",
            PassengerState::Returning         => "returning",
            PassengerState::Boarded           => "boarded",
            PassengerState::Stranded          => "stranded",
            PassengerState::Dead              => "dead",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single terminal outcome of a passenger's day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Boarded,
    Stranded,
    Dead(DeathCause),
}

impl Outcome {
    /// The terminal [`PassengerState`] this outcome corresponds to.
    pub fn state(self) -> PassengerState {
        match self {
            Outcome::Boarded  => PassengerState::Boarded,
            Outcome::Stranded => PassengerState::Stranded,
            Outcome::Dead(_)  => PassengerState::Dead,
        }
    }
}

/// The three one-shot broadcasts a ship fires, in firing order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipSignalKind {
    Arrived,
    LastCall,
    Departed,
}

impl ShipSignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShipSignalKind::Arrived  => "arrived",
            ShipSignalKind::LastCall => "last_call",
            ShipSignalKind::Departed => "departed",
        }
    }
}

impl fmt::Display for ShipSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
