mod common;

use bodybook::core::series::{build_daily_series, build_daily_series_today};
use bodybook::core::window::MAX_WINDOW_DAYS;
use bodybook::models::DailyPoint;
use chrono::Duration;
use common::{day, raw, scored};

fn scores(points: &[DailyPoint]) -> Vec<(i64, bool)> {
    points.iter().map(|p| (p.score, p.has_entry)).collect()
}

#[test]
fn test_series_forward_fills_after_entry() {
    let today = day(2024, 3, 10);
    let entries = vec![scored(today - Duration::days(3), 1)];

    let points = build_daily_series(&entries, 5, today);

    assert_eq!(points.len(), 5);
    assert_eq!(points[0].date, day(2024, 3, 6));
    assert_eq!(
        scores(&points),
        vec![(0, false), (1, true), (1, false), (1, false), (1, false)]
    );
}

#[test]
fn test_series_shape_is_one_point_per_day_ending_today() {
    let today = day(2024, 3, 1); // crosses the end of a leap-year February
    for window in [1u32, 7, 30, 180, 365] {
        let points = build_daily_series(&[], window, today);
        assert_eq!(points.len(), window as usize);
        assert_eq!(points.last().unwrap().date, today);
        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(points.iter().all(|p| p.score == 0 && !p.has_entry));
    }
}

#[test]
fn test_series_each_entry_resets_fill_value() {
    let today = day(2024, 1, 7);
    let entries = vec![
        scored(day(2024, 1, 2), 2),
        scored(day(2024, 1, 5), -1),
        scored(day(2024, 1, 7), 0),
    ];
    let points = build_daily_series(&entries, 7, today);
    assert_eq!(
        scores(&points),
        vec![
            (0, false),
            (2, true),
            (2, false),
            (2, false),
            (-1, true),
            (-1, false),
            (0, true),
        ]
    );
}

#[test]
fn test_series_forward_fill_matches_nearest_earlier_entry() {
    let today = day(2024, 2, 20);
    let entries: Vec<_> = [(3, 1), (8, -2), (9, 2), (15, 1)]
        .iter()
        .map(|&(d, s)| scored(day(2024, 2, d), s))
        .collect();
    let points = build_daily_series(&entries, 20, today);

    let mut last = 0;
    for p in &points {
        if p.has_entry {
            last = p.score;
        } else {
            assert_eq!(p.score, last, "day {}", p.date);
        }
    }
}

#[test]
fn test_series_ignores_entries_before_window() {
    let today = day(2024, 1, 20);
    let entries = vec![scored(day(2024, 1, 10), 2)];
    let points = build_daily_series(&entries, 3, today);
    assert_eq!(scores(&points), vec![(0, false); 3]);
}

#[test]
fn test_series_skips_unparseable_dates() {
    let today = day(2024, 1, 3);
    let entries = vec![raw("garbage", Some(2)), raw("2024-01-02", Some(-2))];
    let points = build_daily_series(&entries, 3, today);
    assert_eq!(scores(&points), vec![(0, false), (-2, true), (-2, false)]);
}

#[test]
fn test_series_missing_score_is_zero() {
    let today = day(2024, 1, 3);
    let entries = vec![raw("2024-01-01", Some(2)), raw("2024-01-02", None)];
    let points = build_daily_series(&entries, 3, today);
    assert_eq!(scores(&points), vec![(2, true), (0, true), (0, false)]);
}

#[test]
fn test_series_duplicate_dates_last_one_wins() {
    let today = day(2024, 1, 2);
    let entries = vec![raw("2024-01-02", Some(2)), raw("2024-01-02", Some(-1))];
    let points = build_daily_series(&entries, 1, today);
    assert_eq!(scores(&points), vec![(-1, true)]);
}

#[test]
fn test_series_today_ends_on_local_date() {
    let points = build_daily_series_today(&[], 7);
    assert_eq!(points.len(), 7);
    assert_eq!(points[6].date, chrono::Local::now().date_naive());
}

#[test]
fn test_series_huge_window_is_capped() {
    let today = day(2024, 1, 3);
    let points = build_daily_series(&[scored(day(2024, 1, 2), 1)], u32::MAX, today);
    assert_eq!(points.len(), MAX_WINDOW_DAYS as usize);
    assert_eq!(points.last().unwrap().date, today);
    assert_eq!(points.last().unwrap().score, 1);
}
