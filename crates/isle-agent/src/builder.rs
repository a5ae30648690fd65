//! Fluent builder for one ship's passenger roster.
//!
//! # Usage
//!
//! ```rust
//! use isle_agent::RosterBuilder;
//! use isle_core::{SharedRng, ShipId};
//!
//! let rng = SharedRng::seeded(42);
//! let roster = RosterBuilder::new(ShipId(2), 50).build(&rng);
//!
//! assert_eq!(roster.len(), 50);
//! assert_eq!(roster[0].id.0, 2000);
//! ```

use isle_core::{PassengerId, RandomSource, ShipId};

use crate::PassengerProfile;

/// Builds the passenger profiles disembarking from one ship.
///
/// Passenger ids are `ship * 1000 + index`, so rosters from different ships
/// never collide.
pub struct RosterBuilder {
    ship:  ShipId,
    count: u32,
}

impl RosterBuilder {
    /// A roster of `count` passengers for `ship`.
    pub fn new(ship: ShipId, count: u32) -> Self {
        Self { ship, count }
    }

    /// Draw every passenger's demographics from `rng`.
    pub fn build(self, rng: &dyn RandomSource) -> Vec<PassengerProfile> {
        (0..self.count)
            .map(|i| PassengerProfile::random(PassengerId::for_roster(self.ship, i), self.ship, rng))
            .collect()
    }
}
