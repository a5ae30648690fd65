//! `isle-output` — day report writers for the cruise-island simulation.
//!
//! | Writer / function   | Produces                                                  |
//! |---------------------|-----------------------------------------------------------|
//! | [`CsvWriter`]       | `day_stats.csv`, `matches.csv`, `ship_tallies.csv`        |
//! | [`render_summary`]  | the end-of-day text block (totals, incidents, deaths, …)  |
//!
//! JSON needs no writer here: `DayReport` is `Serialize`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use isle_output::{CsvWriter, write_report};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &report)?;
//! print!("{}", isle_output::render_summary(&report));
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod summary;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{DayStatRow, MatchRow, ShipTallyRow};
pub use summary::render_summary;
pub use writer::{OutputWriter, write_report};
