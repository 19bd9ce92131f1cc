mod common;

use bodybook::core::journal;
use bodybook::core::stats::compute_stats_at;
use bodybook::core::store::{EntryStore, MemoryStore};
use bodybook::core::window::CutoffMode;
use bodybook::models::Entry;
use common::{at, day, raw, scored, weighed};

// ── upsert ───────────────────────────────────────────────────────────────────

#[test]
fn test_upsert_inserts_new_entry() {
    let store = MemoryStore::default();
    let saved = journal::upsert(&store, scored(day(2024, 1, 1), 2)).unwrap();

    assert_eq!(saved.date, "2024-01-01");
    assert!(saved.timestamp.is_some());
    assert!(saved.updated_at.is_none());
    assert_eq!(store.load(), vec![saved]);
}

#[test]
fn test_upsert_replaces_same_day() {
    let store = MemoryStore::default();
    let first = journal::upsert(&store, scored(day(2024, 1, 1), 2)).unwrap();

    let mut edit = weighed(day(2024, 1, 1), "150");
    edit.score = Some(-1);
    edit.timestamp = None;
    let second = journal::upsert(&store, edit).unwrap();

    let entries = store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, Some(-1));
    assert_eq!(entries[0].weight.as_deref(), Some("150"));
    assert_eq!(entries[0].exercise, None);
    assert_eq!(second.timestamp, first.timestamp);
    assert!(second.updated_at.is_some());
}

#[test]
fn test_upsert_defaults_missing_score_to_zero() {
    let store = MemoryStore::default();
    let mut e = weighed(day(2024, 1, 1), "150");
    e.score = None;
    let saved = journal::upsert(&store, e).unwrap();
    assert_eq!(saved.score, Some(0));
}

#[test]
fn test_upsert_keeps_collection_newest_first() {
    let store = MemoryStore::default();
    for d in [3, 1, 5, 2] {
        journal::upsert(&store, scored(day(2024, 1, d), 0)).unwrap();
    }
    let dates: Vec<String> = store.load().into_iter().map(|e| e.date).collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-03", "2024-01-02", "2024-01-01"]);
}

#[test]
fn test_upsert_twice_counts_once_in_stats() {
    let store = MemoryStore::default();
    journal::upsert(&store, scored(day(2024, 1, 2), 1)).unwrap();
    journal::upsert(&store, scored(day(2024, 1, 2), 2)).unwrap();

    let s = compute_stats_at(&store.load(), 7, at(day(2024, 1, 3), 12, 0), CutoffMode::Rolling);
    assert_eq!(s.total_entries, 1);
    assert!((s.avg_score - 2.0).abs() < f64::EPSILON);
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn test_upsert_rejects_invalid_entries() {
    let store = MemoryStore::default();

    let empty = Entry::new(day(2024, 1, 1));
    let err = journal::upsert(&store, empty).unwrap_err();
    assert!(err.to_string().contains("empty entry"));

    for w in ["0", "-5", "1000.5", "abc"] {
        let err = journal::upsert(&store, weighed(day(2024, 1, 1), w)).unwrap_err();
        assert!(err.to_string().contains("weight"), "{}: {}", w, err);
    }

    let mut loud = scored(day(2024, 1, 1), 3);
    let err = journal::upsert(&store, loud.clone()).unwrap_err();
    assert!(err.to_string().contains("score"));
    loud.score = Some(-3);
    assert!(journal::upsert(&store, loud).is_err());

    let mut bad_date = scored(day(2024, 1, 1), 0);
    bad_date.date = "01/02/2024".to_string();
    assert!(journal::upsert(&store, bad_date).is_err());

    assert!(store.load().is_empty());
}

#[test]
fn test_upsert_accepts_weight_bounds() {
    let store = MemoryStore::default();
    journal::upsert(&store, weighed(day(2024, 1, 1), "1000")).unwrap();
    journal::upsert(&store, weighed(day(2024, 1, 2), " 0.1 ")).unwrap();
    assert_eq!(store.load().len(), 2);
}

#[test]
fn test_whitespace_only_fields_do_not_count_as_content() {
    let mut e = Entry::new(day(2024, 1, 1));
    e.diet = Some("   ".to_string());
    e.comments = Some("only a note".to_string());
    assert!(e.validate().is_err());
}

// ── get / delete / recent ────────────────────────────────────────────────────

#[test]
fn test_get_by_date() {
    let store = MemoryStore::default();
    journal::upsert(&store, scored(day(2024, 1, 1), 1)).unwrap();

    assert_eq!(journal::get(&store, day(2024, 1, 1)).unwrap().score, Some(1));
    assert!(journal::get(&store, day(2024, 1, 2)).is_none());
}

#[test]
fn test_delete_removes_entry() {
    let store = MemoryStore::default();
    journal::upsert(&store, scored(day(2024, 1, 1), 1)).unwrap();
    journal::upsert(&store, scored(day(2024, 1, 2), 1)).unwrap();

    journal::delete(&store, day(2024, 1, 1)).unwrap();
    let entries = store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, "2024-01-02");
}

#[test]
fn test_delete_missing_entry_fails() {
    let store = MemoryStore::default();
    journal::upsert(&store, scored(day(2024, 1, 1), 1)).unwrap();

    let err = journal::delete(&store, day(2024, 1, 9)).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_recent_sorts_and_limits() {
    let store = MemoryStore::new(vec![
        scored(day(2024, 1, 1), 0),
        raw("bogus", Some(0)),
        scored(day(2024, 1, 9), 0),
        scored(day(2024, 1, 4), 0),
    ]);

    let dates: Vec<String> = journal::recent(&store, 10).into_iter().map(|e| e.date).collect();
    assert_eq!(dates, vec!["2024-01-09", "2024-01-04", "2024-01-01", "bogus"]);

    let top: Vec<String> = journal::recent(&store, 2).into_iter().map(|e| e.date).collect();
    assert_eq!(top, vec!["2024-01-09", "2024-01-04"]);
}
