//! Post-stay rolls.
//!
//! After every stay, a location with a hazard rolls it first; a passenger
//! who dies does not roll for incidents.  A survivor then rolls the
//! location's incident, if any.  Each location carries at most one of each,
//! so no counter can be hit twice by one stay.

use isle_core::{DeathCause, IncidentKind, RandomSource};
use isle_world::Location;

/// The fatal event striking after a stay, if it strikes.
pub fn roll_hazard(location: &Location, rng: &dyn RandomSource) -> Option<DeathCause> {
    let hazard = location.hazard.as_ref()?;
    rng.chance(hazard.probability).then_some(hazard.cause)
}

/// The incident and its extra delay in simulated seconds, if one occurs.
pub fn roll_incident(location: &Location, rng: &dyn RandomSource) -> Option<(IncidentKind, f64)> {
    let incident = location.incident.as_ref()?;
    if !rng.chance(incident.probability) {
        return None;
    }
    let delay = rng.uniform(incident.delay.min, incident.delay.max);
    Some((incident.kind, delay))
}
