use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::core::window::{self, CutoffMode};
use crate::models::entry::Entry;
use crate::models::stats::{
    ScoreBreakdown, StatsSnapshot, Trend, format_score, format_weight,
};

/// Entries needed before the trend is anything other than stable.
const TREND_MIN_ENTRIES: usize = 6;
/// Entries in each half of the trend comparison.
const TREND_GROUP: usize = 3;
/// Difference in group averages that counts as a change.
const TREND_MARGIN: f64 = 0.3;

/// Compute statistics for the window ending now, with a rolling cutoff.
pub fn compute_stats(entries: &[Entry], window_days: u32) -> StatsSnapshot {
    compute_stats_at(entries, window_days, window::now(), CutoffMode::Rolling)
}

/// Compute statistics for the `window_days` ending at `now`.
///
/// Malformed dates drop the entry; malformed scores count as 0 and
/// malformed weights are ignored.
///
/// # Panics
///
/// Panics if `window_days` is zero.
pub fn compute_stats_at(
    entries: &[Entry],
    window_days: u32,
    now: NaiveDateTime,
    mode: CutoffMode,
) -> StatsSnapshot {
    assert!(window_days > 0, "window must span at least one day");

    let cutoff = window::cutoff(now, window_days, mode);
    let recent: Vec<&Entry> = newest_first(latest_per_day(entries))
        .into_iter()
        .filter(|(day, _)| window::day_start(*day) >= cutoff)
        .map(|(_, e)| e)
        .collect();

    tracing::debug!(
        window_days,
        total = entries.len(),
        in_window = recent.len(),
        "computing stats"
    );

    if recent.is_empty() {
        return StatsSnapshot::empty(window_days);
    }

    let total = recent.len();
    let avg_score = mean_score(&recent);

    let weights: Vec<f64> = recent.iter().filter_map(|e| e.weight_value()).collect();
    let avg_weight = if weights.is_empty() {
        None
    } else {
        Some(weights.iter().sum::<f64>() / weights.len() as f64)
    };

    // `weights` is newest-first, so this is latest minus earliest.
    let weight_change = match (weights.first(), weights.last()) {
        (Some(latest), Some(earliest)) if weights.len() >= 2 => latest - earliest,
        _ => 0.0,
    };

    let mut score_breakdown = ScoreBreakdown::default();
    for e in &recent {
        score_breakdown.record(e.score_value());
    }

    StatsSnapshot {
        window_days,
        total_entries: total,
        avg_score,
        avg_score_display: format_score(avg_score),
        avg_weight,
        avg_weight_display: format_weight(avg_weight),
        weight_change,
        weight_change_display: format!("{:.1}", weight_change),
        score_breakdown,
        recent_trend: recent_trend(&recent),
        // Midnight windows and future-dated entries can hold more than
        // `window_days` days.
        completion_pct: (total as f64 / window_days as f64 * 100.0).min(100.0),
    }
}

/// Compare the three most recent entries with the three before them.
///
/// `recent` must already be ordered newest-first.
pub fn recent_trend(recent: &[&Entry]) -> Trend {
    if recent.len() < TREND_MIN_ENTRIES {
        return Trend::Stable;
    }
    let last = mean_score(&recent[..TREND_GROUP]);
    let prev = mean_score(&recent[TREND_GROUP..TREND_GROUP * 2]);

    if last > prev + TREND_MARGIN {
        Trend::Improving
    } else if last < prev - TREND_MARGIN {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean_score(entries: &[&Entry]) -> f64 {
    let sum: f64 = entries.iter().map(|e| e.score_value() as f64).sum();
    sum / entries.len() as f64
}

/// Keep one entry per parseable day, the last one in collection order.
///
/// Output keeps the order of first appearance of each day.
pub fn latest_per_day(entries: &[Entry]) -> Vec<(NaiveDate, &Entry)> {
    let mut slots: HashMap<NaiveDate, usize> = HashMap::new();
    let mut out: Vec<(NaiveDate, &Entry)> = Vec::new();
    for e in entries {
        let Some(day) = e.day() else {
            continue;
        };
        match slots.get(&day) {
            Some(&i) => out[i].1 = e,
            None => {
                slots.insert(day, out.len());
                out.push((day, e));
            }
        }
    }
    out
}

/// Stable sort by day, most recent first. Ties keep their input order.
pub fn newest_first<T>(mut dated: Vec<(NaiveDate, T)>) -> Vec<(NaiveDate, T)> {
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated
}
