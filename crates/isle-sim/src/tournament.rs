//! The elimination tournament.
//!
//! The stranded are shuffled, then two combatants at a time are popped off
//! the pool and fight; the winner goes back into the pool.  With `N`
//! combatants there are exactly `N - 1` matches and one survivor.  With none
//! there is no tournament and no survivor.
//!
//! A match between strengths `a` and `b` draws `r` uniformly from
//! `1..=a + b`; `a` wins when `r <= a`, so `P(a wins) = a / (a + b)`.

use isle_agent::PassengerProfile;
use isle_core::{IslandEvent, IslandObserver, MatchRecord, PassengerId, RandomSource, TimeScale, shuffle};
use serde::Serialize;

/// Fight one match and return the winner's id.
pub fn duel(a: &PassengerProfile, b: &PassengerProfile, rng: &dyn RandomSource) -> PassengerId {
    let total = a.strength.saturating_add(b.strength);
    if rng.int_inclusive(1, total) <= a.strength { a.id } else { b.id }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TournamentOutcome {
    /// Every match, in the order fought.
    pub matches:  Vec<MatchRecord>,
    pub survivor: Option<PassengerId>,
}

pub struct Tournament<'a> {
    rng:        &'a dyn RandomSource,
    observer:   &'a dyn IslandObserver,
    time:       TimeScale,
    /// Simulated seconds between matches.
    pause_secs: f64,
}

impl<'a> Tournament<'a> {
    pub fn new(rng: &'a dyn RandomSource, observer: &'a dyn IslandObserver) -> Self {
        Self { rng, observer, time: TimeScale::default(), pause_secs: 0.0 }
    }

    /// Pause `pause_secs` simulated seconds (converted with `time`) between
    /// consecutive matches.
    pub fn with_pause(mut self, time: TimeScale, pause_secs: f64) -> Self {
        self.time = time;
        self.pause_secs = pause_secs;
        self
    }

    /// Reduce `combatants` to a single survivor.
    pub fn run(&self, mut combatants: Vec<PassengerProfile>) -> TournamentOutcome {
        self.observer.on_event(&IslandEvent::TournamentStarted { combatants: combatants.len() });
        shuffle(self.rng, &mut combatants);

        let mut matches = Vec::with_capacity(combatants.len().saturating_sub(1));
        while combatants.len() > 1 {
            if !matches.is_empty() {
                self.time.sleep(self.pause_secs);
            }
            let (Some(a), Some(b)) = (combatants.pop(), combatants.pop()) else { break };
            let winner = duel(&a, &b, self.rng);
            let record = MatchRecord {
                round:      matches.len() as u32 + 1,
                a:          a.id,
                a_strength: a.strength,
                b:          b.id,
                b_strength: b.strength,
                winner,
            };
            self.observer.on_event(&IslandEvent::Match(record));
            matches.push(record);
            combatants.push(if winner == a.id { a } else { b });
        }

        let survivor = combatants.first().map(|p| p.id);
        self.observer.on_event(&IslandEvent::TournamentEnded { survivor });
        TournamentOutcome { matches, survivor }
    }
}
