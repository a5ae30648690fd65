//! Plain-text end-of-day summary.

use std::fmt::Write as _;

use isle_core::{DeathCause, IncidentKind};
use isle_sim::DayReport;

const RULE_WIDTH: usize = 60;

fn incident_label(kind: IncidentKind) -> &'static str {
    match kind {
        IncidentKind::Drunk        => "Got drunk",
        IncidentKind::Intoxicated  => "Intoxicated",
        IncidentKind::PopupDelay   => "Pop-up delays",
        IncidentKind::FellAsleep   => "Fell asleep",
        IncidentKind::LostHiking   => "Lost while hiking",
        IncidentKind::SnorkelDelay => "Snorkeling delays",
    }
}

fn death_label(cause: DeathCause) -> &'static str {
    match cause {
        DeathCause::Shark => "Shark attacks",
        DeathCause::Cliff => "Fell off a cliff",
    }
}

/// Render the end-of-day statistics block.
pub fn render_summary(report: &DayReport) -> String {
    let s = &report.stats;
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // `write!` into a `String` cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:^width$}", "END OF DAY STATISTICS", width = RULE_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:<24}{}", "Total passengers:", s.total_passengers);
    let _ = writeln!(out, "{:<24}{}", "Boarded ships:", s.boarded);
    let _ = writeln!(out, "{:<24}{}", "Stranded passengers:", s.stranded);
    let _ = writeln!(out, "{:<24}{}", "Deaths:", s.total_deaths());

    let _ = writeln!(out, "\n---- ACTIVITY INCIDENTS ----");
    for &kind in IncidentKind::ALL {
        let _ = writeln!(out, "{:<24}{}", format!("{}:", incident_label(kind)), s.incidents_of(kind));
    }

    let _ = writeln!(out, "\n---- DEATHS ----");
    for &cause in DeathCause::ALL {
        let _ = writeln!(out, "{:<24}{}", format!("{}:", death_label(cause)), s.deaths_by(cause));
    }
    for d in &report.dead {
        let _ = writeln!(out, "  - {} (ship {}, strength {}) {}", d.passenger, d.ship, d.strength, d.cause);
    }

    let _ = writeln!(out, "\n---- SHIPS ----");
    for ship in &report.ships {
        let _ = writeln!(
            out,
            "{:<6} arrived +{:>5.1}s  roster {:>4}  boarded {:>4}  stranded {:>4}  dead {:>3}",
            ship.ship.to_string(),
            ship.arrival_offset_secs,
            ship.roster,
            ship.boarded,
            ship.stranded,
            ship.dead,
        );
    }

    let _ = writeln!(out, "\n---- LOCATIONS ----");
    for loc in &report.locations {
        let _ = writeln!(
            out,
            "{:<22} visits {:>5}  turned away {:>5}  peak {:>4}/{}",
            loc.name, loc.visits, loc.rejections, loc.peak, loc.capacity,
        );
    }

    let _ = writeln!(out, "\n---- TOURNAMENT ----");
    match report.survivor {
        Some(survivor) => {
            let _ = writeln!(out, "{:<24}{}", "Matches fought:", report.matches.len());
            let _ = writeln!(out, "{:<24}{}", "Ultimate survivor:", survivor);
        }
        None => {
            let _ = writeln!(out, "No stranded passengers today");
        }
    }
    let _ = writeln!(out, "{rule}");
    out
}
