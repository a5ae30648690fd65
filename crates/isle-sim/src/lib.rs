//! `isle-sim` — runs one island day.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`island`]      | `Island` — schedules ships, builds rosters, launches threads |
//! | [`ambient`]     | `AmbientEvents` — background rainstorms, breakdowns, festivals |
//! | [`tournament`]  | `Tournament`, `duel` — strength-weighted elimination         |
//! | [`day`]         | `Day` — the coordinator: launch, quiesce, resolve, report    |
//! | [`builder`]     | `DayBuilder` — fluent construction with validation           |
//! | [`report`]      | `DayReport`, `ShipReport`, `DeadPassenger`                   |
//! | [`observer`]    | `TracingObserver`, `RecordingObserver`                       |
//! | [`error`]       | `SimError`, `SimResult<T>`                                   |
//!
//! # Day phases
//!
//! ```text
//! setup      locations, ships (random arrival in the window), rosters
//! launch     ambient thread, one thread per ship, one per passenger
//! quiesce    join every ship, then every passenger, then stop ambient
//! resolve    dead report, tournament over the stranded registry
//! report     stats snapshot, per-ship tallies, per-location usage
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let report = DayBuilder::new(IslandConfig::default())
//!     .seed(7)
//!     .observer(Arc::new(TracingObserver))
//!     .build()?
//!     .run()?;
//! println!("{} stranded", report.stats.stranded);
//! ```

pub mod ambient;
pub mod builder;
pub mod day;
pub mod error;
pub mod island;
pub mod observer;
pub mod report;
pub mod tournament;


pub use ambient::AmbientEvents;
pub use builder::DayBuilder;
pub use day::Day;
pub use error::{SimError, SimResult};
pub use island::{Island, LaunchedIsland};
pub use observer::{RecordingObserver, TracingObserver};
pub use report::{DayReport, DeadPassenger, ShipReport};
pub use tournament::{Tournament, TournamentOutcome, duel};
