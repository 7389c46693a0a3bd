//! Activity over time: timelines, weekday/month maps and the hour heatmap.
//!
//! System notifications never count as activity here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::LabelCount;
use crate::core::{MONTH_NAMES, Selection, WEEKDAY_NAMES, period_label};

/// Messages on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Weekday-by-hour activity grid.
///
/// Rows are weekdays Monday-first, columns are the hour buckets `"0-1"`
/// through `"23-24"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: [&'static str; 7],
    pub columns: Vec<String>,
    pub cells: [[usize; 24]; 7],
}

impl Heatmap {
    /// Count for a weekday row (0 = Monday) and hour.
    pub fn get(&self, weekday: usize, hour: usize) -> usize {
        self.cells
            .get(weekday)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Message counts per `"Month-Year"`, oldest first.
pub fn monthly_timeline(selection: &Selection<'_>) -> Vec<LabelCount> {
    let mut buckets: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for entry in selection.activity() {
        let cal = &entry.calendar;
        buckets
            .entry((cal.year, cal.month))
            .or_insert((cal.month_year.as_str(), 0))
            .1 += 1;
    }
    buckets
        .into_values()
        .map(|(label, count)| LabelCount::new(label, count))
        .collect()
}

/// Message counts per calendar date, oldest first.
pub fn daily_timeline(selection: &Selection<'_>) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for entry in selection.activity() {
        *buckets.entry(entry.calendar.date).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Counts for all seven weekdays, Monday first, zeros included.
pub fn week_activity_map(selection: &Selection<'_>) -> Vec<LabelCount> {
    let mut counts = [0usize; 7];
    for entry in selection.activity() {
        counts[entry.calendar.weekday.num_days_from_monday() as usize] += 1;
    }
    WEEKDAY_NAMES
        .iter()
        .zip(counts)
        .map(|(name, count)| LabelCount::new(*name, count))
        .collect()
}

/// Counts for all twelve months in calendar order, zeros included.
pub fn month_activity_map(selection: &Selection<'_>) -> Vec<LabelCount> {
    let mut counts = [0usize; 12];
    for entry in selection.activity() {
        counts[entry.calendar.month as usize - 1] += 1;
    }
    MONTH_NAMES
        .iter()
        .zip(counts)
        .map(|(name, count)| LabelCount::new(*name, count))
        .collect()
}

/// Weekday-by-hour grid, or `None` when the selection has no activity.
pub fn activity_heatmap(selection: &Selection<'_>) -> Option<Heatmap> {
    let mut cells = [[0usize; 24]; 7];
    let mut any = false;
    for entry in selection.activity() {
        let cal = &entry.calendar;
        cells[cal.weekday.num_days_from_monday() as usize][cal.hour as usize] += 1;
        any = true;
    }
    any.then(|| Heatmap {
        rows: WEEKDAY_NAMES,
        columns: (0..24).map(period_label).collect(),
        cells,
    })
}

/// Messages per hour of day, index 0 is midnight.
pub fn most_active_hour(selection: &Selection<'_>) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for entry in selection.activity() {
        hours[entry.calendar.hour as usize] += 1;
    }
    hours
}
