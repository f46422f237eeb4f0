//! Collapses an ascending list of available dates into maximal contiguous
//! runs and renders the run labels shown in the availability table.

use chrono::{Datelike, NaiveDate};

/// Format one date as its `MM/DD` display label.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Group an ascending list of dates into maximal contiguous runs.
///
/// A date starts a new run when it is not exactly the previous date plus
/// one day. Every input date lands in exactly one run, in order. Empty
/// input produces no runs.
pub fn collapse_runs(days: &[NaiveDate]) -> Vec<Vec<NaiveDate>> {
    let mut runs: Vec<Vec<NaiveDate>> = Vec::new();

    for &day in days {
        match runs.last_mut() {
            Some(run) if run.last().and_then(|d| d.succ_opt()) == Some(day) => run.push(day),
            _ => runs.push(vec![day]),
        }
    }

    runs
}

/// Comma-joined labels of every day in a run, e.g. `"07/01,07/02,07/03"`.
pub fn joined_label(run: &[NaiveDate]) -> String {
    run.iter()
        .map(|&d| day_label(d))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compact run label: `"first-last"` for multi-day runs, just `"first"`
/// for a single day.
pub fn compact_label(run: &[NaiveDate]) -> String {
    match (run.first(), run.last()) {
        (Some(&first), Some(&last)) if first != last => {
            format!("{}-{}", day_label(first), day_label(last))
        }
        (Some(&first), _) => day_label(first),
        _ => String::new(),
    }
}
