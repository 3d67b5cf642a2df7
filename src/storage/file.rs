//! Flat-file ticket store
//!
//! The whole collection lives in one JSON array. Reads parse the entire
//! file; writes overwrite it in place. There is no temp-file-then-rename
//! discipline and no locking: single-writer access is a stated assumption
//! of this system.

use crate::core::Ticket;
use crate::error::{Result, SupportTicketError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default data file name, next to wherever the tool is run
pub const DEFAULT_TICKETS_FILE: &str = "tickets_data.json";

/// Loads and persists the full ticket collection as a single JSON document
#[derive(Debug, Clone)]
pub struct TicketStore {
    path: PathBuf,
}

impl TicketStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection
    ///
    /// An absent file is an empty collection. A file that exists but is not
    /// a well-formed ticket array surfaces as `CorruptData`; nothing is
    /// recovered silently.
    pub fn load_all(&self) -> Result<Vec<Ticket>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let tickets: Vec<Ticket> =
            serde_json::from_str(&content).map_err(|source| SupportTicketError::CorruptData {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = tickets.len(), "loaded tickets");
        Ok(tickets)
    }

    /// Serialize and overwrite the whole collection
    pub fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        let content = serde_json::to_string_pretty(tickets)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = tickets.len(), "saved tickets");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_ticket;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TicketStore {
        TicketStore::new(dir.path().join(DEFAULT_TICKETS_FILE))
    }

    #[test]
    fn test_load_missing_file_is_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let tickets = vec![sample_ticket(1), sample_ticket(2)];

        store.save_all(&tickets).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, tickets);
    }

    #[test]
    fn test_save_of_loaded_collection_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save_all(&[sample_ticket(1)]).unwrap();

        let first = fs::read_to_string(store.path()).unwrap();
        let loaded = store.load_all().unwrap();
        store.save_all(&loaded).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_file_surfaces_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, SupportTicketError::CorruptData { .. }));
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save_all(&[sample_ticket(1), sample_ticket(2)]).unwrap();
        store.save_all(&[sample_ticket(3)]).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "TKT-003");
    }
}
