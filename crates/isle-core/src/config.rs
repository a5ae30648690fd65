//! Per-run configuration.
//!
//! `IslandConfig` is the whole parameter surface of a day: timing, ship
//! schedule, population, locations, probabilities, speeds and weights.
//! The engine treats every value as injected; nothing downstream hardcodes
//! a literal.  `Default` reproduces the reference day, and any subset of
//! fields can be overridden from TOML:
//!
//! ```toml
//! time_scale = 0.1
//! ships_per_day = 2
//!
//! [ship]
//! stay_hours = 6.0
//!
//! [[locations]]
//! name       = "lighthouse"
//! kind       = "other"
//! capacity   = 10
//! base_hours = 1.0
//! distance   = 2.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    DeathCause, IncidentKind, IsleError, IsleResult, LocationKind, TimeScale, TransportMode,
    TransportSpeeds,
};

// ── Leaf sections ─────────────────────────────────────────────────────────────

/// A closed range of simulated seconds, sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: f64,
    pub max: f64,
}

impl DelayRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, what: &str) -> IsleResult<()> {
        if !(self.min >= 0.0 && self.max >= self.min && self.max.is_finite()) {
            return Err(IsleError::Config(format!(
                "{what}: range [{}, {}] must be finite, non-negative and ordered",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Ship timing, in island hours and minutes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Hours between a ship's arrival and its departure.
    pub stay_hours: f64,
    /// Length of the window between last call and departure.
    pub last_call_minutes: f64,
    /// Earliest arrival, as an hour of the day.  Offset zero of the day.
    pub arrival_window_start: f64,
    /// Latest arrival, as an hour of the day.
    pub arrival_window_end: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            stay_hours:           8.0,
            last_call_minutes:    30.0,
            arrival_window_start: 8.0,
            arrival_window_end:   10.0,
        }
    }
}

/// Activity-choice weights.  A policy knob, not a correctness property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityWeights {
    /// Bar weight for the young age group.
    pub bar_young: u32,
    /// Bar weight for every other age group.
    pub bar_other: u32,
    pub beach:     u32,
    /// Weight for every other location kind.
    pub other:     u32,
}

impl Default for ActivityWeights {
    fn default() -> Self {
        Self { bar_young: 3, bar_other: 2, beach: 3, other: 1 }
    }
}

/// The urgent trip back to the ship after last call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnTripConfig {
    /// Distance from anywhere on the island back to the pier.
    pub distance: f64,
    pub mode:     TransportMode,
    /// Chance that a passenger who got drunk reacts late to last call.
    pub drunk_delay_probability: f64,
    pub drunk_delay: DelayRange,
}

impl Default for ReturnTripConfig {
    fn default() -> Self {
        Self {
            distance:                0.5,
            mode:                    TransportMode::Taxi,
            drunk_delay_probability: 0.05,
            drunk_delay:             DelayRange::new(1.0, 2.0),
        }
    }
}

/// The background ambient-event generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub enabled:       bool,
    /// Quiet time before each event.
    pub interval:      DelayRange,
    /// How long each event lasts.
    pub duration_secs: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            enabled:       true,
            interval:      DelayRange::new(5.0, 15.0),
            duration_secs: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Pause between matches, in simulated seconds.
    pub match_pause_secs: f64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self { match_pause_secs: 0.2 }
    }
}

/// A fatal event that can strike after a stay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardConfig {
    pub cause:       DeathCause,
    pub probability: f64,
}

/// A non-fatal incident rolled after a stay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncidentConfig {
    pub kind:        IncidentKind,
    pub probability: f64,
    pub delay:       DelayRange,
}

/// One attraction on the island.
///
/// A location carries at most one hazard and at most one incident, so each
/// incident counter is incremented at most once per stay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name:       String,
    pub kind:       LocationKind,
    pub capacity:   u32,
    /// Length of a normal stay, in island hours.
    pub base_hours: f64,
    /// Distance from the pier; input to the travel-time model.
    pub distance:   f64,
    #[serde(default)]
    pub hazard:     Option<HazardConfig>,
    #[serde(default)]
    pub incident:   Option<IncidentConfig>,
}

impl LocationConfig {
    pub fn new(name: &str, kind: LocationKind, capacity: u32, base_hours: f64, distance: f64) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            capacity,
            base_hours,
            distance,
            hazard: None,
            incident: None,
        }
    }

    pub fn with_hazard(mut self, cause: DeathCause, probability: f64) -> Self {
        self.hazard = Some(HazardConfig { cause, probability });
        self
    }

    pub fn with_incident(mut self, kind: IncidentKind, probability: f64, delay: DelayRange) -> Self {
        self.incident = Some(IncidentConfig { kind, probability, delay });
        self
    }
}

/// The reference island: two restaurants, two bars, a shopping street, two
/// excursions and a beach.
pub fn default_locations() -> Vec<LocationConfig> {
    use IncidentKind::*;
    use LocationKind::*;

    vec![
        LocationConfig::new("mexican_restaurant", Restaurant, 40, 1.0, 1.0)
            .with_incident(Intoxicated, 0.05, DelayRange::new(1.0, 2.0)),
        LocationConfig::new("italian_restaurant", Restaurant, 40, 1.0, 1.2)
            .with_incident(Intoxicated, 0.05, DelayRange::new(1.0, 2.0)),
        LocationConfig::new("senor_frog_bar", Bar, 60, 1.5, 1.5)
            .with_incident(Drunk, 0.07, DelayRange::new(2.0, 3.0)),
        LocationConfig::new("irish_bar", Bar, 50, 1.5, 1.3)
            .with_incident(Drunk, 0.07, DelayRange::new(2.0, 3.0)),
        LocationConfig::new("shopping_street", Shopping, 80, 1.0, 1.8)
            .with_incident(PopupDelay, 0.04, DelayRange::new(2.0, 4.0)),
        LocationConfig::new("hiking_excursion", Hiking, 30, 2.0, 2.0)
            .with_hazard(DeathCause::Cliff, 0.02)
            .with_incident(LostHiking, 0.03, DelayRange::new(3.0, 5.0)),
        LocationConfig::new("snorkeling_excursion", Snorkeling, 30, 2.0, 2.2)
            .with_hazard(DeathCause::Shark, 0.02)
            .with_incident(SnorkelDelay, 0.03, DelayRange::new(3.0, 5.0)),
        LocationConfig::new("paradise_beach", Beach, 100, 2.0, 1.0)
            .with_incident(FellAsleep, 0.04, DelayRange::new(2.0, 4.0)),
    ]
}

// ── IslandConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration of one island day.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the day builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandConfig {
    /// Simulated seconds per island hour.
    pub seconds_per_hour:    f64,
    /// Real seconds per simulated second (1.0 = reference pacing).
    pub time_scale:          f64,
    pub ships_per_day:       u16,
    pub passengers_per_ship: u32,
    pub ship:                ShipConfig,
    pub transport:           TransportSpeeds,
    pub weights:             ActivityWeights,
    pub return_trip:         ReturnTripConfig,
    pub ambient:             AmbientConfig,
    pub tournament:          TournamentConfig,
    /// Pause before a passenger turned away from a full location chooses
    /// again, in simulated seconds.  Cut short by last call.
    pub full_retry_secs:     f64,
    pub locations:           Vec<LocationConfig>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            seconds_per_hour:    5.0,
            time_scale:          1.0,
            ships_per_day:       5,
            passengers_per_ship: 50,
            ship:                ShipConfig::default(),
            transport:           TransportSpeeds::default(),
            weights:             ActivityWeights::default(),
            return_trip:         ReturnTripConfig::default(),
            ambient:             AmbientConfig::default(),
            tournament:          TournamentConfig::default(),
            full_retry_secs:     0.5,
            locations:           default_locations(),
        }
    }
}

impl IslandConfig {
    /// Parse a TOML document.  Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> IsleResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> IsleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The time scale this configuration runs at.
    pub fn time(&self) -> TimeScale {
        TimeScale::new(self.seconds_per_hour, self.time_scale)
    }

    /// Simulated seconds a ship stays at the pier.
    pub fn stay_secs(&self) -> f64 {
        self.time().hours(self.ship.stay_hours)
    }

    /// Simulated seconds between last call and departure.
    pub fn last_call_secs(&self) -> f64 {
        self.time().minutes(self.ship.last_call_minutes)
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> IsleResult<()> {
        let err = |msg: String| Err(IsleError::Config(msg));

        if !(self.seconds_per_hour > 0.0 && self.seconds_per_hour.is_finite()) {
            return err(format!("seconds_per_hour must be positive, got {}", self.seconds_per_hour));
        }
        if !(self.time_scale >= 0.0 && self.time_scale.is_finite()) {
            return err(format!("time_scale must be non-negative, got {}", self.time_scale));
        }
        if !(self.ship.stay_hours > 0.0 && self.ship.stay_hours.is_finite()) {
            return err(format!("ship.stay_hours must be positive, got {}", self.ship.stay_hours));
        }
        if !(self.ship.last_call_minutes >= 0.0 && self.last_call_secs() < self.stay_secs()) {
            return err(format!(
                "ship.last_call_minutes ({}) must be non-negative and shorter than the stay",
                self.ship.last_call_minutes
            ));
        }
        if !(self.ship.arrival_window_end >= self.ship.arrival_window_start) {
            return err("ship.arrival_window_end precedes arrival_window_start".to_owned());
        }
        for mode in TransportMode::ALL {
            let speed = self.transport.speed(mode);
            if !(speed > 0.0 && speed.is_finite()) {
                return err(format!("transport speed for {mode} must be positive, got {speed}"));
            }
        }
        if !(self.return_trip.distance >= 0.0 && self.return_trip.distance.is_finite()) {
            return err(format!("return_trip.distance must be non-negative, got {}", self.return_trip.distance));
        }
        check_probability("return_trip.drunk_delay_probability", self.return_trip.drunk_delay_probability)?;
        self.return_trip.drunk_delay.check("return_trip.drunk_delay")?;
        self.ambient.interval.check("ambient.interval")?;
        if !(self.ambient.duration_secs >= 0.0 && self.ambient.duration_secs.is_finite()) {
            return err(format!("ambient.duration_secs must be non-negative, got {}", self.ambient.duration_secs));
        }
        if !(self.tournament.match_pause_secs >= 0.0) {
            return err("tournament.match_pause_secs must be non-negative".to_owned());
        }
        if !(self.full_retry_secs > 0.0 && self.full_retry_secs.is_finite()) {
            return err(format!("full_retry_secs must be positive, got {}", self.full_retry_secs));
        }
        if self.locations.is_empty() {
            return err("at least one location is required".to_owned());
        }
        if self.locations.len() > u16::MAX as usize {
            return err(format!("too many locations: {}", self.locations.len()));
        }
        if self.passengers_per_ship > PASSENGER_ROSTER_LIMIT {
            return err(format!(
                "passengers_per_ship ({}) exceeds the roster limit of {PASSENGER_ROSTER_LIMIT}",
                self.passengers_per_ship
            ));
        }
        for loc in &self.locations {
            if loc.capacity == 0 {
                return err(format!("location {}: capacity must be at least 1", loc.name));
            }
            if !(loc.base_hours >= 0.0 && loc.base_hours.is_finite()) {
                return err(format!("location {}: base_hours must be non-negative", loc.name));
            }
            if !(loc.distance >= 0.0 && loc.distance.is_finite()) {
                return err(format!("location {}: distance must be non-negative", loc.name));
            }
            if let Some(h) = &loc.hazard {
                check_probability(&format!("location {} hazard", loc.name), h.probability)?;
            }
            if let Some(i) = &loc.incident {
                check_probability(&format!("location {} incident", loc.name), i.probability)?;
                i.delay.check(&format!("location {} incident delay", loc.name))?;
            }
        }
        Ok(())
    }
}

/// Passenger ids are `ship * 1000 + index`, so a roster must fit the stride.
const PASSENGER_ROSTER_LIMIT: u32 = crate::PassengerId::SHIP_STRIDE;

fn check_probability(what: &str, p: f64) -> IsleResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(IsleError::Config(format!("{what}: probability {p} is outside [0, 1]")));
    }
    Ok(())
}
