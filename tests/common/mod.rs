#![allow(dead_code)]

use bodybook::db::Database;
use bodybook::models::Entry;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Local wall-clock instant on the given day.
pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

/// Entry for `date` with a score and some exercise so it passes validation.
pub fn scored(date: NaiveDate, score: i64) -> Entry {
    let mut e = Entry::new(date);
    e.score = Some(score);
    e.exercise = Some("Walking".to_string());
    e
}

/// Entry for `date` with a recorded weight and a neutral score.
pub fn weighed(date: NaiveDate, weight: &str) -> Entry {
    let mut e = Entry::new(date);
    e.weight = Some(weight.to_string());
    e
}

/// Entry built from raw stored fields, bypassing validation.
pub fn raw(date: &str, score: Option<i64>) -> Entry {
    Entry {
        date: date.to_string(),
        score,
        ..Entry::default()
    }
}
