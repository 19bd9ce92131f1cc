use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::core::stats::newest_first;
use crate::core::store::EntryStore;
use crate::core::window::day_key;
use crate::models::entry::Entry;

/// Insert or replace the entry for `entry.date`. Returns the stored entry.
pub fn upsert(store: &impl EntryStore, mut entry: Entry) -> Result<Entry> {
    entry.validate()?;
    if entry.score.is_none() {
        entry.score = Some(0);
    }

    let mut entries = store.load();
    let now = Utc::now().to_rfc3339();
    match entries.iter().position(|e| e.date == entry.date) {
        Some(i) => {
            entry.timestamp = entries[i].timestamp.clone().or(entry.timestamp);
            entry.updated_at = Some(now);
            entries[i] = entry.clone();
        }
        None => {
            if entry.timestamp.is_none() {
                entry.timestamp = Some(now);
            }
            entries.push(entry.clone());
        }
    }

    store.save(&sorted_newest_first(entries))?;
    Ok(entry)
}

/// The entry logged for `date`, if any.
pub fn get(store: &impl EntryStore, date: NaiveDate) -> Option<Entry> {
    let key = day_key(date);
    store.load().into_iter().rev().find(|e| e.date == key)
}

/// Remove the entry for `date`.
pub fn delete(store: &impl EntryStore, date: NaiveDate) -> Result<()> {
    let key = day_key(date);
    let entries = store.load();
    let before = entries.len();
    let kept: Vec<Entry> = entries.into_iter().filter(|e| e.date != key).collect();
    if kept.len() == before {
        anyhow::bail!("entry not found: {}", key);
    }
    store.save(&kept)
}

/// Up to `limit` entries, most recent day first.
pub fn recent(store: &impl EntryStore, limit: usize) -> Vec<Entry> {
    let mut entries = sorted_newest_first(store.load());
    entries.truncate(limit);
    entries
}

/// Order entries newest-first; entries with malformed dates go last, in input order.
fn sorted_newest_first(entries: Vec<Entry>) -> Vec<Entry> {
    let (dated, undated): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .map(|e| (e.day(), e))
        .partition(|(d, _)| d.is_some());
    let dated: Vec<(NaiveDate, Entry)> = dated
        .into_iter()
        .filter_map(|(d, e)| d.map(|d| (d, e)))
        .collect();

    newest_first(dated)
        .into_iter()
        .map(|(_, e)| e)
        .chain(undated.into_iter().map(|(_, e)| e))
        .collect()
}
