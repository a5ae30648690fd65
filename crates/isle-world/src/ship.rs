//! Ships and their three broadcasts.
//!
//! A ship is a timer.  Its thread sleeps until the arrival offset, fires
//! `arrived`, sleeps through the stay until last call, fires `last_call`,
//! sleeps through the last-call window and fires `departed`:
//!
//! ```text
//! t = offset                      arrived
//! t = offset + stay - last_call   last_call
//! t = offset + stay               departed
//! ```
//!
//! Passengers hold an `Arc<ShipSignals>` and never touch the `Ship` itself.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use isle_core::{IslandEvent, IslandObserver, PassengerId, ShipId, ShipSignalKind, TimeScale};

use crate::Signal;

/// The one-shot broadcasts of one ship.  Each fires at most once, always
/// in the order `arrived`, `last_call`, `departed`.
#[derive(Default)]
pub struct ShipSignals {
    pub arrived:   Signal,
    pub last_call: Signal,
    pub departed:  Signal,
}

impl ShipSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ShipSignalKind) -> &Signal {
        match kind {
            ShipSignalKind::Arrived  => &self.arrived,
            ShipSignalKind::LastCall => &self.last_call,
            ShipSignalKind::Departed => &self.departed,
        }
    }
}

pub struct Ship {
    pub id: ShipId,
    /// Simulated seconds from day start until the ship docks.
    pub arrival_offset_secs: f64,
    pub stay_secs:           f64,
    pub last_call_secs:      f64,
    signals: Arc<ShipSignals>,
    roster:  Vec<PassengerId>,
}

impl Ship {
    pub fn new(id: ShipId, arrival_offset_secs: f64, stay_secs: f64, last_call_secs: f64) -> Self {
        Self {
            id,
            arrival_offset_secs,
            stay_secs,
            last_call_secs,
            signals: Arc::new(ShipSignals::new()),
            roster:  Vec::new(),
        }
    }

    /// A handle on this ship's broadcasts, for a passenger to wait on.
    pub fn signals(&self) -> Arc<ShipSignals> {
        Arc::clone(&self.signals)
    }

    /// Add a passenger to the roster.  Setup only; the roster is frozen once
    /// the ship is spawned.
    pub fn attach(&mut self, passenger: PassengerId) {
        self.roster.push(passenger);
    }

    pub fn roster(&self) -> &[PassengerId] {
        &self.roster
    }

    /// Run the ship's whole day on the calling thread.
    pub fn run(&self, time: TimeScale, observer: &dyn IslandObserver) {
        time.sleep(self.arrival_offset_secs);
        self.fire(ShipSignalKind::Arrived, observer);

        time.sleep((self.stay_secs - self.last_call_secs).max(0.0));
        self.fire(ShipSignalKind::LastCall, observer);

        time.sleep(self.last_call_secs);
        self.fire(ShipSignalKind::Departed, observer);
    }

    /// Fire one broadcast, reporting it only on the actual transition.
    pub fn fire(&self, kind: ShipSignalKind, observer: &dyn IslandObserver) {
        if self.signals.get(kind).fire() {
            observer.on_event(&IslandEvent::ShipSignal { ship: self.id, signal: kind });
        }
    }

    /// Move the ship onto its own named thread.  The handle yields the ship
    /// back when its day is over.
    pub fn spawn(
        self,
        time:     TimeScale,
        observer: Arc<dyn IslandObserver>,
    ) -> io::Result<JoinHandle<Ship>> {
        thread::Builder::new().name(format!("ship-{}", self.id)).spawn(move || {
            self.run(time, observer.as_ref());
            self
        })
    }
}
