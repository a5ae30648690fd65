//! Island setup and thread launch.

use std::sync::Arc;
use std::thread::JoinHandle;

use isle_agent::RosterBuilder;
use isle_behavior::{IslandContext, Passenger};
use isle_core::{IslandEvent, Outcome, PassengerId, ShipId};
use isle_world::{Location, Ship, ShipSignals};

use crate::{SimError, SimResult};

/// One island day before launch: the shared context plus every ship and
/// passenger, not yet running.
pub struct Island {
    ctx:        Arc<IslandContext>,
    ships:      Vec<Ship>,
    passengers: Vec<Passenger>,
}

impl Island {
    pub fn new(ctx: Arc<IslandContext>) -> Self {
        Self { ctx, ships: Vec::new(), passengers: Vec::new() }
    }

    pub fn context(&self) -> &Arc<IslandContext> {
        &self.ctx
    }

    pub fn locations(&self) -> &[Location] {
        &self.ctx.locations
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Schedule ships `1..=ships_per_day`, each with a full roster.
    pub fn populate(&mut self) {
        for n in 1..=self.ctx.config.ships_per_day {
            self.add_ship(ShipId(n));
        }
    }

    /// Schedule one ship at a random hour in the arrival window and build
    /// its roster.  Every created passenger counts towards
    /// `total_passengers`.
    pub fn add_ship(&mut self, id: ShipId) {
        let ctx = Arc::clone(&self.ctx);
        let window = &ctx.config.ship;
        let arrival_hour = ctx.rng.uniform(window.arrival_window_start, window.arrival_window_end);
        let offset = ctx.time.hours(arrival_hour - window.arrival_window_start);

        let mut ship = Ship::new(id, offset, ctx.config.stay_secs(), ctx.config.last_call_secs());
        ctx.emit(IslandEvent::ShipScheduled { ship: id, arrival_offset_secs: offset });

        let roster = RosterBuilder::new(id, ctx.config.passengers_per_ship).build(ctx.rng.as_ref());
        for profile in roster {
            ship.attach(profile.id);
            ctx.stats.record_passenger();
            self.passengers.push(Passenger::new(profile, ship.signals(), Arc::clone(&ctx)));
        }
        self.ships.push(ship);
    }

    /// Start every ship and passenger on its own thread.
    ///
    /// If a spawn fails, every ship already scheduled has its signals fired
    /// so that passengers already running can finish, and the error is
    /// returned.
    pub fn launch(self) -> SimResult<LaunchedIsland> {
        let signals: Vec<(ShipId, Arc<ShipSignals>)> =
            self.ships.iter().map(|s| (s.id, s.signals())).collect();
        let mut launched = LaunchedIsland {
            ctx: Arc::clone(&self.ctx),
            signals,
            ships: Vec::with_capacity(self.ships.len()),
            passengers: Vec::with_capacity(self.passengers.len()),
        };

        for ship in self.ships {
            let name = format!("ship-{}", ship.id);
            match ship.spawn(self.ctx.time, Arc::clone(&self.ctx.observer)) {
                Ok(handle) => launched.ships.push((name, handle)),
                Err(source) => return Err(launched.abort(name, source)),
            }
        }
        for passenger in self.passengers {
            let id = passenger.profile().id;
            match passenger.spawn() {
                Ok(handle) => launched.passengers.push((id, handle)),
                Err(source) => return Err(launched.abort(format!("passenger-{id}"), source)),
            }
        }
        Ok(launched)
    }
}

/// A running island: join handles plus each ship's broadcasts.
pub struct LaunchedIsland {
    ctx:        Arc<IslandContext>,
    signals:    Vec<(ShipId, Arc<ShipSignals>)>,
    ships:      Vec<(String, JoinHandle<Ship>)>,
    passengers: Vec<(PassengerId, JoinHandle<Outcome>)>,
}

impl LaunchedIsland {
    pub fn context(&self) -> &Arc<IslandContext> {
        &self.ctx
    }

    /// Wait for every ship to depart.  Returns the ships, rosters intact.
    ///
    /// A panicked ship has its remaining signals fired so that its
    /// passengers are not left waiting forever; the first panic is
    /// reported after every ship has been joined.
    pub fn join_ships(&mut self) -> SimResult<Vec<Ship>> {
        let mut ships = Vec::with_capacity(self.ships.len());
        let mut panicked = None;
        for (name, handle) in self.ships.drain(..) {
            match handle.join() {
                Ok(ship) => ships.push(ship),
                Err(_) => {
                    tracing::error!(worker = %name, "ship thread panicked");
                    panicked.get_or_insert(name);
                }
            }
        }
        if let Some(name) = panicked {
            self.release_all();
            return Err(SimError::WorkerPanicked(name));
        }
        Ok(ships)
    }

    /// Wait for every passenger to reach a terminal outcome.
    pub fn join_passengers(&mut self) -> SimResult<Vec<(PassengerId, Outcome)>> {
        let mut outcomes = Vec::with_capacity(self.passengers.len());
        let mut panicked = None;
        for (id, handle) in self.passengers.drain(..) {
            match handle.join() {
                Ok(outcome) => outcomes.push((id, outcome)),
                Err(_) => {
                    tracing::error!(passenger = %id, "passenger thread panicked");
                    panicked.get_or_insert(format!("passenger-{id}"));
                }
            }
        }
        match panicked {
            Some(name) => Err(SimError::WorkerPanicked(name)),
            None => Ok(outcomes),
        }
    }

    pub fn ship_signals(&self, ship: ShipId) -> Option<&Arc<ShipSignals>> {
        self.signals.iter().find(|(id, _)| *id == ship).map(|(_, s)| s)
    }

    /// Fire every signal of every ship.  No-op for signals already fired.
    fn release_all(&self) {
        for (_, signals) in &self.signals {
            signals.arrived.fire();
            signals.last_call.fire();
            signals.departed.fire();
        }
    }

    /// Tear down after a failed spawn: release everyone already running,
    /// join them, and build the error.
    fn abort(mut self, worker: String, source: std::io::Error) -> SimError {
        tracing::error!(worker = %worker, error = %source, "thread spawn failed");
        self.release_all();
        let _ = self.join_ships();
        let _ = self.join_passengers();
        SimError::Spawn { worker, source }
    }
}
