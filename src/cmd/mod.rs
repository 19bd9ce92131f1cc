pub mod chart;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod init;
pub mod log;
pub mod show;
pub mod stats;
pub mod tags;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use bodybook::core::window;
use bodybook::db::Database;
use bodybook::models::Entry;
use bodybook::models::config::Config;

/// Open the journal database with the configured backup policy.
pub fn open_db(config: &Config) -> Result<Database> {
    Ok(Database::open(&Config::db_path())?.with_backup(config.storage.backup))
}

/// Load all entries, telling the user when they came from the backup slot.
pub fn load_entries(db: &Database) -> Vec<Entry> {
    let loaded = db.load_entries();
    if loaded.restored {
        eprintln!("Stored entries were corrupted and have been restored from backup.");
    }
    loaded.entries
}

/// The current instant, moved onto `date` when the user overrides the day.
pub fn clock(date: Option<NaiveDate>) -> NaiveDateTime {
    let now = window::now();
    match date {
        Some(d) => d.and_time(now.time()),
        None => now,
    }
}
