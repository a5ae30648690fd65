//! The day coordinator.

use std::sync::Arc;

use isle_behavior::IslandContext;
use isle_core::{IslandConfig, IslandEvent, IslandObserver, RandomSource};
use tracing::info;

use crate::report::ship_reports;
use crate::{AmbientEvents, DayReport, DeadPassenger, Island, SimError, SimResult, Tournament};

/// Runs one island day from setup to report.
///
/// Create via [`DayBuilder`][crate::DayBuilder], which validates the
/// configuration.
pub struct Day {
    config:   Arc<IslandConfig>,
    rng:      Arc<dyn RandomSource>,
    observer: Arc<dyn IslandObserver>,
}

impl Day {
    pub(crate) fn new(
        config:   Arc<IslandConfig>,
        rng:      Arc<dyn RandomSource>,
        observer: Arc<dyn IslandObserver>,
    ) -> Self {
        Self { config, rng, observer }
    }

    pub fn config(&self) -> &IslandConfig {
        &self.config
    }

    /// Run the whole day on the calling thread and block until it is over.
    ///
    /// The registries are read only after every ship and every passenger
    /// thread has been joined, so the report is exact.
    pub fn run(&self) -> SimResult<DayReport> {
        let ctx = Arc::new(IslandContext::new(
            Arc::clone(&self.config),
            Arc::clone(&self.rng),
            Arc::clone(&self.observer),
        ));
        info!(
            ships = self.config.ships_per_day,
            passengers_per_ship = self.config.passengers_per_ship,
            locations = ctx.locations.len(),
            "starting island day"
        );
        ctx.emit(IslandEvent::DayStarted {
            ships:               self.config.ships_per_day,
            passengers_per_ship: self.config.passengers_per_ship,
        });

        // ── Setup and launch ──────────────────────────────────────────────
        let mut island = Island::new(Arc::clone(&ctx));
        island.populate();

        let ambient = AmbientEvents::start(Arc::clone(&ctx))
            .map_err(|source| SimError::Spawn { worker: "ambient".to_owned(), source })?;
        let mut launched = island.launch()?;

        // ── Quiesce ───────────────────────────────────────────────────────
        let ships = match launched.join_ships() {
            Ok(ships) => ships,
            Err(err) => {
                // Every signal has been fired; passengers drain promptly.
                let _ = launched.join_passengers();
                let _ = ambient.stop();
                return Err(err);
            }
        };
        let outcomes = launched.join_passengers()?;
        let ambient_events = ambient.stop()?;
        info!(ships = ships.len(), passengers = outcomes.len(), "all ships departed");

        // ── Resolve ───────────────────────────────────────────────────────
        let dead: Vec<DeadPassenger> =
            ctx.ledger.dead().iter().map(|(p, cause)| DeadPassenger::new(p, *cause)).collect();
        let stranded = ctx.ledger.stranded();
        let stranded_ids = stranded.iter().map(|p| p.id).collect();

        let tournament = Tournament::new(self.rng.as_ref(), self.observer.as_ref())
            .with_pause(ctx.time, self.config.tournament.match_pause_secs)
            .run(stranded);

        // ── Report ────────────────────────────────────────────────────────
        let report = DayReport {
            stats:     ctx.stats.snapshot(),
            dead,
            stranded:  stranded_ids,
            matches:   tournament.matches,
            survivor:  tournament.survivor,
            ships:     ship_reports(&ships, &ctx.ledger.entries()),
            locations: ctx.locations.iter().map(|l| l.usage()).collect(),
            ambient_events,
        };
        ctx.emit(IslandEvent::DayEnded);
        info!(
            boarded = report.stats.boarded,
            stranded = report.stats.stranded,
            dead = report.stats.total_deaths(),
            "island day finished"
        );
        Ok(report)
    }
}
