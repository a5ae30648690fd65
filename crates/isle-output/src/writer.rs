//! The `OutputWriter` trait implemented by report backends.

use isle_sim::DayReport;

use crate::{DayStatRow, MatchRow, OutputResult, ShipTallyRow};

/// A sink for the three tables of a day report.
pub trait OutputWriter {
    fn write_day_stats(&mut self, rows: &[DayStatRow]) -> OutputResult<()>;

    fn write_matches(&mut self, rows: &[MatchRow]) -> OutputResult<()>;

    fn write_ship_tallies(&mut self, rows: &[ShipTallyRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every table of `report` and finish the writer.
pub fn write_report(writer: &mut dyn OutputWriter, report: &DayReport) -> OutputResult<()> {
    writer.write_day_stats(&DayStatRow::from_report(report))?;
    let matches: Vec<MatchRow> = report.matches.iter().map(MatchRow::from).collect();
    writer.write_matches(&matches)?;
    let ships: Vec<ShipTallyRow> = report.ships.iter().map(ShipTallyRow::from).collect();
    writer.write_ship_tallies(&ships)?;
    writer.finish()
}
