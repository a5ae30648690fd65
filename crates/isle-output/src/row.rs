//! Plain data row types written by output backends.

use isle_core::{DeathCause, IncidentKind, MatchRecord};
use isle_sim::{DayReport, ShipReport};

/// One named figure of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStatRow {
    pub metric: String,
    pub value:  u64,
}

impl DayStatRow {
    fn new(metric: impl Into<String>, value: u64) -> Self {
        Self { metric: metric.into(), value }
    }

    /// Totals, then every death cause, then every incident kind, then the
    /// tournament size.  Zero counters are included.
    pub fn from_report(report: &DayReport) -> Vec<Self> {
        let s = &report.stats;
        let mut rows = vec![
            Self::new("total_passengers", s.total_passengers),
            Self::new("boarded", s.boarded),
            Self::new("stranded", s.stranded),
            Self::new("dead", s.total_deaths()),
        ];
        rows.extend(DeathCause::ALL.iter().map(|&c| Self::new(format!("died_{c}"), s.deaths_by(c))));
        rows.extend(IncidentKind::ALL.iter().map(|&k| Self::new(k.as_str(), s.incidents_of(k))));
        rows.push(Self::new("matches", report.matches.len() as u64));
        rows.push(Self::new("ambient_events", u64::from(report.ambient_events)));
        rows
    }
}

/// One tournament match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRow {
    pub round:      u32,
    pub a:          u32,
    pub a_strength: u32,
    pub b:          u32,
    pub b_strength: u32,
    pub winner:     u32,
}

impl From<&MatchRecord> for MatchRow {
    fn from(m: &MatchRecord) -> Self {
        Self {
            round:      m.round,
            a:          m.a.0,
            a_strength: m.a_strength,
            b:          m.b.0,
            b_strength: m.b_strength,
            winner:     m.winner.0,
        }
    }
}

/// One ship's roster split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTallyRow {
    pub ship:                u16,
    pub arrival_offset_secs: f64,
    pub roster:              u64,
    pub boarded:             u64,
    pub stranded:            u64,
    pub dead:                u64,
}

impl From<&ShipReport> for ShipTallyRow {
    fn from(s: &ShipReport) -> Self {
        Self {
            ship:                s.ship.0,
            arrival_offset_secs: s.arrival_offset_secs,
            roster:              s.roster,
            boarded:             s.boarded,
            stranded:            s.stranded,
            dead:                s.dead,
        }
    }
}
