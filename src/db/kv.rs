use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::Database;

pub(crate) fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub(crate) fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub(crate) fn remove_item(conn: &Connection, key: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
    Ok(n > 0)
}

impl Database {
    /// Raw contents of a storage slot.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        get_item(&self.conn, key)
    }

    /// Overwrite a storage slot.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        set_item(&self.conn, key, value)
    }
}
