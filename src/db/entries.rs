use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use super::kv::{get_item, remove_item, set_item};
use super::{BACKUP_KEY, Database, ENTRIES_KEY};
use crate::core::store::EntryStore;
use crate::core::window::parse_day_key;
use crate::models::entry::Entry;

/// Result of reading the entry slot.
#[derive(Debug, Default)]
pub struct Loaded {
    pub entries: Vec<Entry>,
    /// The primary slot was unreadable and the backup took its place.
    pub restored: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StorageHealth {
    pub has_data: bool,
    pub has_backup: bool,
    pub data_valid: bool,
    pub backup_valid: bool,
}

/// Decode a stored collection, rejecting anything that is not an array of
/// objects each carrying a valid `date` key and a numeric (or absent) score.
pub fn parse_entries(raw: &str) -> Result<Vec<Entry>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = &value else {
        anyhow::bail!("invalid data: entries must be an array");
    };
    for (i, item) in items.iter().enumerate() {
        check_entry_shape(item).map_err(|e| anyhow::anyhow!("invalid entry at index {}: {}", i, e))?;
    }
    Ok(serde_json::from_value(value)?)
}

fn check_entry_shape(item: &Value) -> Result<()> {
    let Value::Object(fields) = item else {
        anyhow::bail!("must be an object");
    };
    match fields.get("date") {
        Some(Value::String(d)) if parse_day_key(d).is_some() => {}
        Some(Value::String(d)) => anyhow::bail!("date must be in YYYY-MM-DD format (got {})", d),
        _ => anyhow::bail!("date is required and must be a string"),
    }
    match fields.get("score") {
        None | Some(Value::Null) | Some(Value::Number(_)) => Ok(()),
        Some(_) => anyhow::bail!("score must be a number"),
    }
}

impl Database {
    /// Read the entry collection, falling back to the backup slot when the
    /// primary one is unreadable. Never fails.
    pub fn load_entries(&self) -> Loaded {
        let primary = match get_item(&self.conn, ENTRIES_KEY) {
            Ok(None) => return Loaded::default(),
            Ok(Some(raw)) => parse_entries(&raw),
            Err(e) => Err(e),
        };

        match primary {
            Ok(entries) => Loaded {
                entries,
                restored: false,
            },
            Err(err) => {
                tracing::warn!(%err, "stored entries are unreadable, restoring from backup");
                match self.restore_from_backup() {
                    Ok(entries) => Loaded {
                        restored: !entries.is_empty(),
                        entries,
                    },
                    Err(err) => {
                        tracing::warn!(%err, "backup restore failed, starting with no entries");
                        Loaded::default()
                    }
                }
            }
        }
    }

    /// Replace the collection atomically, backing up the current one first.
    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        for (i, e) in entries.iter().enumerate() {
            if e.day().is_none() {
                anyhow::bail!(
                    "invalid entry at index {}: date must be in YYYY-MM-DD format (got {})",
                    i,
                    e.date
                );
            }
        }
        let payload = serde_json::to_string(entries)?;

        let tx = self.conn.unchecked_transaction()?;
        if self.backup
            && let Some(current) = get_item(&tx, ENTRIES_KEY)?
            && parse_entries(&current).is_ok()
        {
            set_item(&tx, BACKUP_KEY, &current)?;
        }
        set_item(&tx, ENTRIES_KEY, &payload)?;
        tx.commit()?;

        tracing::debug!(count = entries.len(), "saved entries");
        Ok(())
    }

    /// Copy the backup slot over the primary one. An absent backup yields no entries.
    pub fn restore_from_backup(&self) -> Result<Vec<Entry>> {
        let Some(raw) = get_item(&self.conn, BACKUP_KEY)? else {
            return Ok(Vec::new());
        };
        let entries = parse_entries(&raw)?;
        set_item(&self.conn, ENTRIES_KEY, &raw)?;
        tracing::info!(count = entries.len(), "restored entries from backup");
        Ok(entries)
    }

    /// Drop the collection, keeping a backup of it when it held anything.
    pub fn clear_entries(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        if let Some(current) = get_item(&tx, ENTRIES_KEY)?
            && parse_entries(&current).is_ok_and(|e| !e.is_empty())
        {
            set_item(&tx, BACKUP_KEY, &current)?;
        }
        remove_item(&tx, ENTRIES_KEY)?;
        tx.commit()?;
        Ok(())
    }

    pub fn storage_health(&self) -> Result<StorageHealth> {
        let data = get_item(&self.conn, ENTRIES_KEY)?;
        let backup = get_item(&self.conn, BACKUP_KEY)?;
        Ok(StorageHealth {
            has_data: data.is_some(),
            has_backup: backup.is_some(),
            data_valid: data.as_deref().is_none_or(|d| parse_entries(d).is_ok()),
            backup_valid: backup.as_deref().is_none_or(|b| parse_entries(b).is_ok()),
        })
    }
}

impl EntryStore for Database {
    fn load(&self) -> Vec<Entry> {
        self.load_entries().entries
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        self.save_entries(entries)
    }
}
