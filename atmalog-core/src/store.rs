//! The journal's entry list and its persisted mirror.

use crate::entry::{PersistedJournalEntry, format_timestamp};
use crate::error::JournalError;
use crate::kv_store::KeyValueStore;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

/// Key under which the whole entry list is stored.
pub const ENTRIES_KEY: &str = "atmalog_entries";

/// Newest-first list of entries backed by a [`KeyValueStore`].
///
/// The store is the single writer of [`ENTRIES_KEY`]: every change rewrites
/// the complete list.
pub struct EntryStore {
    kv: Box<dyn KeyValueStore>,
    entries: Vec<PersistedJournalEntry>,
}

impl EntryStore {
    /// Creates an empty store. Call [`load`](Self::load) to read persisted entries.
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            entries: Vec::new(),
        }
    }

    /// Reads the persisted list, replacing what is in memory.
    ///
    /// A missing key yields an empty list. On a read or parse failure the
    /// in-memory list is left empty and the error is returned for display.
    pub fn load(&mut self) -> Result<&[PersistedJournalEntry], JournalError> {
        self.entries.clear();
        let raw = match self.kv.get(ENTRIES_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                error!("failed to load entries from storage: {e:#}");
                return Err(JournalError::StorageRead(e.into()));
            }
        };
        if let Some(raw) = raw {
            match serde_json::from_str::<Vec<PersistedJournalEntry>>(&raw)
                .context("parsing stored entries")
            {
                Ok(entries) => self.entries = entries,
                Err(e) => {
                    error!("failed to load entries from storage: {e:#}");
                    return Err(JournalError::StorageRead(e.into()));
                }
            }
        }
        debug!(count = self.entries.len(), "loaded journal entries");
        Ok(&self.entries)
    }

    /// Puts `entry` at the front and persists the full list.
    ///
    /// The entry stays in memory even when the write fails.
    pub fn append(
        &mut self,
        entry: PersistedJournalEntry,
    ) -> Result<&[PersistedJournalEntry], JournalError> {
        self.entries.insert(0, entry);
        self.save()?;
        Ok(&self.entries)
    }

    /// Drops every entry, in memory and on disk.
    pub fn clear(&mut self) -> Result<(), JournalError> {
        self.entries.clear();
        self.kv.remove(ENTRIES_KEY).map_err(|e| {
            error!("failed to clear stored entries: {e:#}");
            JournalError::StorageWrite(e.into())
        })
    }

    pub fn entries(&self) -> &[PersistedJournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id for an entry created at `now`: its ISO timestamp, suffixed with
    /// `-N` if an entry with that id already exists.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let base = format_timestamp(now);
        if !self.contains_id(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| !self.contains_id(candidate))
            .unwrap_or(base)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    fn save(&self) -> Result<(), JournalError> {
        let result = serde_json::to_string(&self.entries)
            .context("serializing entries")
            .and_then(|json| self.kv.set(ENTRIES_KEY, &json));
        if let Err(e) = result {
            error!("failed to save entries to storage: {e:#}");
            return Err(JournalError::StorageWrite(e.into()));
        }
        debug!(count = self.entries.len(), "saved journal entries");
        Ok(())
    }
}
