//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `day_stats.csv`
//! - `matches.csv`
//! - `ship_tallies.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DayStatRow, MatchRow, OutputResult, ShipTallyRow};

/// Writes a day report to three CSV files.
pub struct CsvWriter {
    day_stats: Writer<File>,
    matches:   Writer<File>,
    ships:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut day_stats = Writer::from_path(dir.join("day_stats.csv"))?;
        day_stats.write_record(["metric", "value"])?;

        let mut matches = Writer::from_path(dir.join("matches.csv"))?;
        matches.write_record(["round", "a", "a_strength", "b", "b_strength", "winner"])?;

        let mut ships = Writer::from_path(dir.join("ship_tallies.csv"))?;
        ships.write_record(["ship", "arrival_offset_secs", "roster", "boarded", "stranded", "dead"])?;

        Ok(Self { day_stats, matches, ships, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day_stats(&mut self, rows: &[DayStatRow]) -> OutputResult<()> {
        for row in rows {
            self.day_stats.write_record([row.metric.as_str(), row.value.to_string().as_str()])?;
        }
        Ok(())
    }

    fn write_matches(&mut self, rows: &[MatchRow]) -> OutputResult<()> {
        for row in rows {
            self.matches.write_record(&[
                row.round.to_string(),
                row.a.to_string(),
                row.a_strength.to_string(),
                row.b.to_string(),
                row.b_strength.to_string(),
                row.winner.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_ship_tallies(&mut self, rows: &[ShipTallyRow]) -> OutputResult<()> {
        for row in rows {
            self.ships.write_record(&[
                row.ship.to_string(),
                format!("{:.3}", row.arrival_offset_secs),
                row.roster.to_string(),
                row.boarded.to_string(),
                row.stranded.to_string(),
                row.dead.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.day_stats.flush()?;
        self.matches.flush()?;
        self.ships.flush()?;
        Ok(())
    }
}
