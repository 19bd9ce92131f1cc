use anyhow::Result;

use super::kv::{get_item, set_item};
use super::{Database, TAGS_KEY};
use crate::core::tags::TagBook;

impl Database {
    /// Stored tag book, or the default one when missing or unreadable.
    pub fn load_tags(&self) -> TagBook {
        match get_item(&self.conn, TAGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "stored tags are unreadable, using defaults");
                TagBook::default()
            }),
            Ok(None) => TagBook::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read tags, using defaults");
                TagBook::default()
            }
        }
    }

    pub fn save_tags(&self, tags: &TagBook) -> Result<()> {
        set_item(&self.conn, TAGS_KEY, &serde_json::to_string(tags)?)
    }
}
