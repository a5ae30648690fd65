//! `IslandContext` — the shared, read-mostly state of one island day.

use std::sync::Arc;

use isle_core::{IslandConfig, IslandEvent, IslandObserver, RandomSource, TimeScale};
use isle_world::{Location, OutcomeLedger, Stats};

/// Handles shared by every passenger thread of one day.
///
/// The context itself is immutable once built.  Everything that changes
/// during the day (occupancy, counters, registries) synchronises
/// internally, so threads only ever need `&IslandContext`.
///
/// | Field       | Mutated by passengers through               |
/// |-------------|---------------------------------------------|
/// | `locations` | `Location::try_enter` / `Occupancy` guard   |
/// | `stats`     | atomic `record_*` increments                |
/// | `ledger`    | one `record` per passenger                  |
/// | `rng`       | the source's own lock                       |
/// | `observer`  | the observer's own interior mutability      |
pub struct IslandContext {
    pub config:    Arc<IslandConfig>,
    pub time:      TimeScale,
    pub locations: Vec<Location>,
    pub stats:     Stats,
    pub ledger:    OutcomeLedger,
    pub rng:       Arc<dyn RandomSource>,
    pub observer:  Arc<dyn IslandObserver>,
}

impl IslandContext {
    /// Build a context with one `Location` per configured location, empty
    /// counters and an empty ledger.
    pub fn new(
        config:   Arc<IslandConfig>,
        rng:      Arc<dyn RandomSource>,
        observer: Arc<dyn IslandObserver>,
    ) -> Self {
        let time = config.time();
        let locations = config
            .locations
            .iter()
            .enumerate()
            .map(|(i, cfg)| {
                // `IslandConfig::validate` caps the location count at u16::MAX.
                let id = isle_core::LocationId(i as u16);
                Location::from_config(id, cfg, &time)
            })
            .collect();
        Self {
            config,
            time,
            locations,
            stats: Stats::new(),
            ledger: OutcomeLedger::new(),
            rng,
            observer,
        }
    }

    #[inline]
    pub fn emit(&self, event: IslandEvent) {
        self.observer.on_event(&event);
    }
}
