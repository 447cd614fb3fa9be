//! Rolling averages and chart series over the entry collection.
//!
//! A "day" here is a position in submission order, not a calendar date.

use crate::{bmi::round1, ChartSeries, Entry, WeeklyAverages};

/// Number of trailing entries the weekly averages cover
pub const WEEKLY_WINDOW: usize = 7;

pub const SLEEP_SERIES_LABEL: &str = "Hours of Sleep";
pub const EXERCISE_SERIES_LABEL: &str = "Minutes of Exercise";

/// Mean sleep and exercise over the last seven entries
pub fn weekly_averages(entries: &[Entry]) -> WeeklyAverages {
    if entries.is_empty() {
        return WeeklyAverages::NoData;
    }

    let start = entries.len().saturating_sub(WEEKLY_WINDOW);
    let window = &entries[start..];
    let days = window.len();

    let total_sleep: f64 = window.iter().map(|e| e.sleep_hours).sum();
    let total_exercise: f64 = window.iter().map(|e| e.exercise_minutes).sum();

    WeeklyAverages::Available {
        avg_sleep: round1(total_sleep / days as f64),
        avg_exercise: round1(total_exercise / days as f64),
        days,
    }
}

/// Label for the entry at `index`
pub fn day_label(index: usize) -> String {
    format!("Day {}", index + 1)
}

pub fn sleep_series(entries: &[Entry]) -> ChartSeries {
    series(SLEEP_SERIES_LABEL, entries, |e| e.sleep_hours)
}

pub fn exercise_series(entries: &[Entry]) -> ChartSeries {
    series(EXERCISE_SERIES_LABEL, entries, |e| e.exercise_minutes)
}

fn series(label: &'static str, entries: &[Entry], value: impl Fn(&Entry) -> f64) -> ChartSeries {
    ChartSeries {
        label,
        points: entries
            .iter()
            .enumerate()
            .map(|(i, e)| (day_label(i), value(e)))
            .collect(),
    }
}
