mod common;

use bodybook::core::series::build_daily_series;
use bodybook::core::stats::compute_stats_at;
use bodybook::core::tags::TagField;
use bodybook::core::window::CutoffMode;
use bodybook::db::StorageHealth;
use bodybook::models::StatsSnapshot;
use bodybook::output;
use bodybook::output::human;
use common::{at, day, scored, weighed};
use serde_json::json;

#[test]
fn test_success_envelope() {
    let v = output::success("stats", json!({ "days": 7 }));
    assert_eq!(v["status"], "ok");
    assert_eq!(v["command"], "stats");
    assert_eq!(v["data"]["days"], 7);
    assert!(v["error"].is_null());
}

#[test]
fn test_error_envelope() {
    let v = output::error("delete", "general_error", "entry not found: 2024-01-01");
    assert_eq!(v["status"], "error");
    assert!(v["data"].is_null());
    assert_eq!(v["error"]["code"], "general_error");
    assert_eq!(v["error"]["message"], "entry not found: 2024-01-01");
}

#[test]
fn test_format_stats_empty_window() {
    colored::control::set_override(false);
    let text = human::format_stats(&StatsSnapshot::empty(30), "lbs");
    assert!(text.contains("last 30 day(s)"));
    assert!(text.contains("No entries in this window."));
}

#[test]
fn test_format_stats_summary() {
    colored::control::set_override(false);
    let today = day(2024, 1, 10);
    let mut heavy = weighed(day(2024, 1, 8), "152");
    heavy.score = Some(2);
    let entries = vec![heavy, weighed(day(2024, 1, 9), "150")];
    let s = compute_stats_at(&entries, 7, at(today, 12, 0), CutoffMode::Rolling);

    let text = human::format_stats(&s, "kg");
    assert!(text.contains("Vibe score: +1.00 (excellent)"), "{}", text);
    assert!(text.contains("Based on 2 entries"));
    assert!(text.contains("Avg weight: 151.0 kg"));
    assert!(text.contains("(-2.0 kg)"), "{}", text);
    assert!(text.contains("Days: 0 rough, 1 neutral, 1 good"));
}

#[test]
fn test_format_series_marks_logged_and_carried_days() {
    let today = day(2024, 1, 4);
    let points = build_daily_series(&[scored(day(2024, 1, 2), 2)], 4, today);
    let chart = human::format_series(&points);
    let rows: Vec<&str> = chart.lines().collect();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], " +2 | ●──");
    assert_eq!(rows[2], "  0 |─···");
    assert_eq!(rows[4], " -2 |    ");
    assert!(rows[5].contains("2024-01-01"));
    assert!(rows[5].contains("2024-01-04"));
}

#[test]
fn test_format_series_empty() {
    assert_eq!(human::format_series(&[]), "No days to chart.");
}

#[test]
fn test_format_entry_lists_filled_fields() {
    colored::control::set_override(false);
    let mut e = weighed(day(2024, 1, 1), "150");
    e.exercise = Some("Running".to_string());
    e.comments = Some("felt strong".to_string());
    let text = human::format_entry(&e, "lbs");

    assert!(text.starts_with("2024-01-01 | vibe 0 | 150 lbs"));
    assert!(text.contains("exercise: Running"));
    assert!(text.contains("# felt strong"));
    assert!(!text.contains("diet"));
}

#[test]
fn test_format_entries_table_has_header_and_rows() {
    let table = human::format_entries_table(&[scored(day(2024, 1, 1), -1)], "lbs");
    assert!(table.contains("weight (lbs)"));
    assert!(table.contains("2024-01-01"));
    assert!(table.contains("Walking"));
}

#[test]
fn test_format_health() {
    colored::control::set_override(false);
    let h = StorageHealth {
        has_data: true,
        has_backup: false,
        data_valid: false,
        backup_valid: true,
    };
    let text = human::format_health(&h);
    assert!(text.contains("Entries: present (INVALID)"));
    assert!(text.contains("Backup: none"));
}

#[test]
fn test_format_tags() {
    assert_eq!(human::format_tags(TagField::Diet, &[]), "diet: (no suggestions)");
    assert_eq!(
        human::format_tags(TagField::Exercise, &["Yoga", "Swimming"]),
        "exercise: Yoga, Swimming"
    );
}
