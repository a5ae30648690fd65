//! Simulation time model.
//!
//! # Design
//!
//! The island runs in real time: every suspension (travel, dwell, incident
//! delay, ship timer) is a real wait.  All configured durations are written
//! in *simulated seconds*, the unit of the reference day, where one island
//! hour lasts `seconds_per_hour` simulated seconds.  `TimeScale` maps them to
//! wall-clock time:
//!
//!   real = simulated_secs * factor
//!
//! `factor = 1.0` runs the reference pacing; tests compress a whole day into
//! a fraction of a second with a small factor.

use std::time::Duration;

/// Converts simulated seconds and hours into real `Duration`s.
///
/// `TimeScale` is `Copy` and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeScale {
    /// Simulated seconds in one island hour.  Default: 5.0.
    pub seconds_per_hour: f64,
    /// Real seconds per simulated second.  Default: 1.0.
    pub factor: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self { seconds_per_hour: 5.0, factor: 1.0 }
    }
}

impl TimeScale {
    pub fn new(seconds_per_hour: f64, factor: f64) -> Self {
        Self { seconds_per_hour, factor }
    }

    /// Simulated seconds spanned by `hours` island hours.
    #[inline]
    pub fn hours(&self, hours: f64) -> f64 {
        hours * self.seconds_per_hour
    }

    /// Simulated seconds spanned by `minutes` island minutes.
    #[inline]
    pub fn minutes(&self, minutes: f64) -> f64 {
        self.hours(minutes / 60.0)
    }

    /// Real duration of `secs` simulated seconds.  Negative, NaN and
    /// non-finite inputs collapse to zero.
    pub fn real(&self, secs: f64) -> Duration {
        let real = secs * self.factor;
        if real.is_finite() && real > 0.0 {
            Duration::from_secs_f64(real)
        } else {
            Duration::ZERO
        }
    }

    /// Block the calling thread for `secs` simulated seconds.
    pub fn sleep(&self, secs: f64) {
        let d = self.real(secs);
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}
