//! Background ambient events.
//!
//! Every few simulated seconds the island announces a rainstorm, a breakdown
//! of one transport mode, or a festival near the shopping street, and a
//! fixed time later announces its end.  Events are reported to the
//! observer and nothing else: they do not touch capacities, probabilities,
//! travel times or passenger decisions.  Wiring them into behaviour would
//! start here, by publishing the active event somewhere `IslandContext`
//! can see it.
//!
//! The generator runs until [`AmbientEvents::stop`].  It waits on its stop
//! signal rather than sleeping, so it exits at once when stopped, even in
//! the middle of an interval or an event.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use isle_behavior::IslandContext;
use isle_core::{AmbientKind, IslandEvent, TransportMode};
use isle_world::Signal;

use crate::{SimError, SimResult};

pub struct AmbientEvents {
    stop:   Arc<Signal>,
    handle: Option<JoinHandle<u32>>,
}

impl AmbientEvents {
    /// Start the generator thread.  When ambient events are disabled in the
    /// configuration no thread is started and `stop` is a no-op.
    pub fn start(ctx: Arc<IslandContext>) -> io::Result<Self> {
        let stop = Arc::new(Signal::new());
        if !ctx.config.ambient.enabled {
            return Ok(Self { stop, handle: None });
        }
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("ambient".to_owned())
            .spawn(move || generate(&ctx, &thread_stop))?;
        Ok(Self { stop, handle: Some(handle) })
    }

    /// Signal the generator to stop and wait for it.  Returns the number of
    /// events it announced.
    pub fn stop(mut self) -> SimResult<u32> {
        self.stop.fire();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| SimError::WorkerPanicked("ambient".to_owned())),
            None => Ok(0),
        }
    }
}

impl Drop for AmbientEvents {
    fn drop(&mut self) {
        self.stop.fire();
    }
}

fn generate(ctx: &IslandContext, stop: &Signal) -> u32 {
    let cfg = &ctx.config.ambient;
    let mut announced = 0;
    loop {
        let quiet = ctx.rng.uniform(cfg.interval.min, cfg.interval.max);
        if stop.wait_timeout(ctx.time.real(quiet)) {
            return announced;
        }

        let kind = AmbientKind::ALL[ctx.rng.index(AmbientKind::COUNT).unwrap_or(0)];
        let detail = match kind {
            AmbientKind::TransportBreakdown => {
                Some(TransportMode::ALL[ctx.rng.index(TransportMode::ALL.len()).unwrap_or(0)])
            }
            _ => None,
        };
        ctx.emit(IslandEvent::AmbientStarted { kind, detail });
        announced += 1;

        let stopped = stop.wait_timeout(ctx.time.real(cfg.duration_secs));
        ctx.emit(IslandEvent::AmbientEnded { kind, detail });
        if stopped {
            return announced;
        }
    }
}
