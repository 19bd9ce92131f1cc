use chrono::{Days, NaiveDate};
use std::collections::HashMap;

use crate::core::window::{self, MAX_WINDOW_DAYS};
use crate::models::entry::Entry;
use crate::models::stats::DailyPoint;

/// Daily score series for the window ending today (local clock).
pub fn build_daily_series_today(entries: &[Entry], window_days: u32) -> Vec<DailyPoint> {
    build_daily_series(entries, window_days, window::today())
}

/// One point per day from `today - window_days + 1` through `today`, oldest first.
///
/// Days without an entry repeat the last known score (0 before the first
/// entry in the window) and are marked `has_entry: false`. Windows longer
/// than [`MAX_WINDOW_DAYS`] are cut to that length, and days before the
/// earliest representable date are skipped.
pub fn build_daily_series(entries: &[Entry], window_days: u32, today: NaiveDate) -> Vec<DailyPoint> {
    let window_days = window_days.min(MAX_WINDOW_DAYS);

    // Later duplicates overwrite earlier ones; unparseable keys never match a day.
    let scores: HashMap<NaiveDate, i64> = entries
        .iter()
        .filter_map(|e| e.day().map(|d| (d, e.score_value())))
        .collect();

    let mut last_score = 0;
    let mut points = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days).rev() {
        let Some(date) = today.checked_sub_days(Days::new(offset as u64)) else {
            continue;
        };
        let has_entry = match scores.get(&date) {
            Some(&score) => {
                last_score = score;
                true
            }
            None => false,
        };
        points.push(DailyPoint {
            date,
            score: last_score,
            has_entry,
        });
    }
    points
}
