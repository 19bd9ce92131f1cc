mod entries;
mod kv;
mod migrate;
mod tags;

pub use entries::{Loaded, StorageHealth, parse_entries};

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Slot holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "entries";
/// Slot holding the collection as it was before the last save.
pub const BACKUP_KEY: &str = "entries_backup";
/// Slot holding the tag suggestion book.
pub const TAGS_KEY: &str = "tags";

pub struct Database {
    pub(crate) conn: Connection,
    backup: bool,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn, backup: true };
        migrate::run(&db.conn)?;
        Ok(db)
    }

    /// Turn the pre-save backup of the entry collection on or off.
    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup = enabled;
        self
    }
}
