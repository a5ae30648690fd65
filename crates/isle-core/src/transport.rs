//! Transportation modes and the closed-form travel-time model.
//!
//! Travel is pure elapsed time: `distance / speed(mode)`.  There is no
//! network and no routing.

use serde::{Deserialize, Serialize};

/// The means by which a passenger moves between the port and a location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// On foot.
    Walk,
    /// Island shuttle bus.
    Bus,
    /// Fastest mode.  The default for the return to the ship.
    Taxi,
}

impl TransportMode {
    /// Every mode, in ascending speed order.
    pub const ALL: [TransportMode; 3] = [TransportMode::Walk, TransportMode::Bus, TransportMode::Taxi];

    /// Human-readable label, useful for log fields and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Bus  => "bus",
            TransportMode::Taxi => "taxi",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speed per mode, in distance units per simulated second.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSpeeds {
    pub walk: f64,
    pub bus:  f64,
    pub taxi: f64,
}

impl Default for TransportSpeeds {
    fn default() -> Self {
        Self { walk: 1.0, bus: 3.0, taxi: 4.0 }
    }
}

impl TransportSpeeds {
    #[inline]
    pub fn speed(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walk => self.walk,
            TransportMode::Bus  => self.bus,
            TransportMode::Taxi => self.taxi,
        }
    }

    /// Simulated seconds needed to cover `distance` by `mode`.
    #[inline]
    pub fn travel_time(&self, mode: TransportMode, distance: f64) -> f64 {
        distance / self.speed(mode)
    }
}
