//! The in-memory entry collection and its write-through persistence.
//!
//! Positions follow submission order and shift on removal; each entry also
//! carries a stable id for callers that need one.

use crate::storage::EntryPersistence;
use crate::{Entry, EntryInput, Error, Result};
use uuid::Uuid;

/// Ordered entry collection mirrored to a persistence collaborator
pub struct EntryStore<P: EntryPersistence> {
    entries: Vec<Entry>,
    persistence: P,
}

impl<P: EntryPersistence> EntryStore<P> {
    /// Load prior state once at startup
    ///
    /// A missing payload yields an empty store. A payload that cannot be read
    /// or parsed is logged and also yields an empty store.
    pub fn load(persistence: P) -> Self {
        let entries = match persistence.load() {
            Ok(Some(entries)) => {
                tracing::info!("Loaded {} entries", entries.len());
                entries
            }
            Ok(None) => {
                tracing::info!("No stored entries, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to load stored entries: {}. Starting empty.", e);
                Vec::new()
            }
        };

        Self {
            entries,
            persistence,
        }
    }

    /// Current contents in submission order
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Build an entry from submitted values and add it at the end
    pub fn append(&mut self, input: EntryInput) -> Result<&Entry> {
        let entry = Entry::new(input);
        tracing::debug!("Appending entry {}", entry.id);

        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)?;

        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Remove the entry at `index`; later entries shift down by one
    ///
    /// An out-of-range index is rejected and nothing changes.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(Error::EntryIndex {
                index,
                len: self.entries.len(),
            });
        }

        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::debug!("Removed entry {} at position {}", removed.id, index);
        Ok(removed)
    }

    pub fn remove_by_id(&mut self, id: Uuid) -> Result<Entry> {
        let index = self.position(id).ok_or(Error::EntryNotFound(id))?;
        self.remove_at(index)
    }

    /// Start editing the entry at `index`
    ///
    /// The entry is removed immediately and its values returned for
    /// re-entry. Nothing is written back until the caller appends again, so
    /// an edit that is never resubmitted loses the original entry.
    pub fn begin_edit(&mut self, index: usize) -> Result<EntryInput> {
        let removed = self.remove_at(index)?;
        Ok(removed.to_input())
    }

    /// Delete the stored key, then drop every entry
    pub fn clear(&mut self) -> Result<()> {
        self.persistence.remove()?;
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::info!("Cleared {} entries", dropped);
        Ok(())
    }

    /// Write `next` through, then make it the in-memory collection
    ///
    /// On a failed write the in-memory collection is left as it was.
    fn commit(&mut self, next: Vec<Entry>) -> Result<()> {
        self.persistence.save(&next)?;
        self.entries = next;
        Ok(())
    }
}
